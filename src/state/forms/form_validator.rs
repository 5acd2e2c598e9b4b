//! Applies field rules to form state and mirrors results onto the view

use super::field::{FieldId, Validity};
use super::form_state::FormState;
use super::presenter;
use super::validators;
use super::view::FormView;

/// Validate one field, record the outcome and update its error annotation
pub fn validate_field<V: FormView + ?Sized>(
    state: &mut FormState,
    view: &mut V,
    field: FieldId,
) -> bool {
    let result = validators::validate(state.field(field));
    let entry = state.field_mut(field);

    if result.valid {
        entry.validity = Validity::Valid;
        entry.error = None;
        presenter::clear_error(view, field);
    } else {
        let message = result.message.unwrap_or_default();
        entry.validity = Validity::Invalid;
        entry.error = Some(message.to_string());
        presenter::show_error(view, field, message);
    }

    tracing::debug!(field = %field, valid = result.valid, "validated field");
    result.valid
}

/// Validate every field in form order.
///
/// All fields run even after a failure so each annotation is refreshed.
pub fn validate_all<V: FormView + ?Sized>(state: &mut FormState, view: &mut V) -> bool {
    FieldId::ALL
        .into_iter()
        .fold(true, |all_valid, field| {
            validate_field(state, view, field) && all_valid
        })
}
