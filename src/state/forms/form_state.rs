//! Contact form state

use super::field::{FieldId, FormField, Validity};

/// Ordered fields of the contact form plus keyboard focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
    /// Focused slot: a field index, or `fields.len()` for the submit button
    pub active_field_index: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text(FieldId::FirstName, false),
                FormField::text(FieldId::LastName, false),
                FormField::text(FieldId::Email, false),
                FormField::radio(FieldId::QueryType),
                FormField::text(FieldId::Message, true),
                FormField::checkbox(FieldId::Consent),
            ],
            active_field_index: 0,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        // every FieldId is inserted by `new`
        &self.fields[Self::index_of(id)]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[Self::index_of(id)]
    }

    fn index_of(id: FieldId) -> usize {
        match id {
            FieldId::FirstName => 0,
            FieldId::LastName => 1,
            FieldId::Email => 2,
            FieldId::QueryType => 3,
            FieldId::Message => 4,
            FieldId::Consent => 5,
        }
    }

    /// True only when every field has been validated as valid
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.validity == Validity::Valid)
    }

    /// Number of focus slots (fields + submit button)
    pub fn slot_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Field under keyboard focus (None when the submit button is focused)
    pub fn active_field(&self) -> Option<FieldId> {
        self.fields.get(self.active_field_index).map(|f| f.id)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn set_active_slot(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }

    pub fn focus(&mut self, id: FieldId) {
        self.active_field_index = Self::index_of(id);
    }

    pub fn focus_submit(&mut self) {
        self.active_field_index = self.fields.len();
    }

    /// Clear every value, selection and validity; focus returns to the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::QueryType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fields_are_in_form_order() {
        let state = FormState::new();
        let ids: Vec<_> = state.fields().iter().map(|f| f.id).collect();
        assert_eq!(ids, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_field_lookup_matches_id() {
        let state = FormState::new();
        for id in FieldId::ALL {
            assert_eq!(state.field(id).id, id);
        }
    }

    #[test]
    fn test_new_form_is_untouched() {
        let state = FormState::new();
        assert!(state
            .fields()
            .iter()
            .all(|f| f.validity == Validity::Unknown && f.error.is_none()));
        assert!(!state.is_valid());
    }

    #[test]
    fn test_is_valid_requires_every_field() {
        let mut state = FormState::new();
        for id in FieldId::ALL {
            state.field_mut(id).validity = Validity::Valid;
        }
        assert!(state.is_valid());

        state.field_mut(FieldId::Consent).validity = Validity::Invalid;
        assert!(!state.is_valid());

        state.field_mut(FieldId::Consent).validity = Validity::Unknown;
        assert!(!state.is_valid());
    }

    #[test]
    fn test_last_slot_is_submit() {
        let mut state = FormState::new();
        assert_eq!(state.slot_count(), 7);
        state.set_active_slot(6);
        assert!(state.is_submit_active());
        assert_eq!(state.active_field(), None);
        assert!(state.active_field_mut().is_none());
    }

    #[test]
    fn test_set_active_slot_clamps() {
        let mut state = FormState::new();
        state.set_active_slot(99);
        assert!(state.is_submit_active());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = FormState::new();
        state.field_mut(FieldId::FirstName).set_text("Ann".to_string());
        state.field_mut(FieldId::QueryType).select(Some(QueryType::GeneralEnquiry));
        state.field_mut(FieldId::Consent).set_flag(true);
        state.field_mut(FieldId::Email).validity = Validity::Invalid;
        state.focus(FieldId::Message);

        state.reset();

        assert_eq!(state, FormState::new());
    }
}
