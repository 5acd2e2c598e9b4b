//! Contact form controller: event handling and the submit lifecycle

use super::field::{FieldId, QueryType};
use super::form_state::FormState;
use super::form_validator;
use super::presenter;
use super::view::FormView;
use crate::state::notification::NotificationTimer;
use std::time::Duration;
use tokio::time::Instant;

/// Context handed to the submit handler
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the host from running its own submit action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[cfg(test)]
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form was reset and the notification shown
    Accepted,
    /// At least one field failed; values and annotations were left in place
    Rejected,
}

/// Interaction events dispatched to the form
#[derive(Debug, PartialEq, Eq)]
pub enum FormEvent<'a> {
    /// Value of a text field was edited
    Input(FieldId),
    /// Focus left a field
    Blur(FieldId),
    /// Checkbox toggled or radio option picked
    Change(FieldId),
    Submit(&'a mut SubmitEvent),
}

/// Owns the form state, its view and the success notification
#[derive(Debug)]
pub struct ContactForm<V: FormView> {
    state: FormState,
    view: V,
    notification: NotificationTimer,
    validate_on_blur: bool,
    submissions: u32,
}

impl<V: FormView> ContactForm<V> {
    pub fn new(view: V, notification_delay: Duration) -> Self {
        Self {
            state: FormState::new(),
            view,
            notification: NotificationTimer::new(notification_delay),
            validate_on_blur: true,
            submissions: 0,
        }
    }

    /// Only validate text fields on submit, not when focus leaves them
    pub fn with_validate_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notification(&self) -> &NotificationTimer {
        &self.notification
    }

    /// Number of accepted submissions since startup
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Dispatch an event using the current time
    pub fn handle_event(&mut self, event: FormEvent<'_>) -> Option<SubmitOutcome> {
        self.handle_event_at(event, Instant::now())
    }

    /// Dispatch an event; `now` anchors the notification hide on success
    pub fn handle_event_at(&mut self, event: FormEvent<'_>, now: Instant) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Input(field) => {
                // fields already flagged revalidate live so the error clears on fix
                if self.state.field(field).is_invalid() {
                    self.validate_field(field);
                }
                None
            }
            FormEvent::Blur(field) => {
                if field.is_text() && self.validate_on_blur {
                    self.validate_field(field);
                }
                None
            }
            FormEvent::Change(field) => {
                self.validate_field(field);
                None
            }
            FormEvent::Submit(submit) => Some(self.submit(submit, now)),
        }
    }

    pub fn validate_field(&mut self, field: FieldId) -> bool {
        form_validator::validate_field(&mut self.state, &mut self.view, field)
    }

    pub fn validate_all(&mut self) -> bool {
        form_validator::validate_all(&mut self.state, &mut self.view)
    }

    /// Validate everything; on success reset the form and show the notification
    pub fn submit(&mut self, event: &mut SubmitEvent, now: Instant) -> SubmitOutcome {
        event.prevent_default();

        if !self.validate_all() {
            tracing::debug!("submission rejected");
            return SubmitOutcome::Rejected;
        }

        self.state.reset();
        self.state.field_mut(FieldId::QueryType).select(None);
        for field in FieldId::ALL {
            presenter::clear_error(&mut self.view, field);
        }
        self.notification.show_success(&mut self.view, now);
        self.submissions += 1;

        tracing::info!(submissions = self.submissions, "contact form submitted");
        SubmitOutcome::Accepted
    }

    /// Toggle the consent checkbox and fire its change event
    pub fn toggle_consent(&mut self) {
        self.state.field_mut(FieldId::Consent).toggle_flag();
        self.validate_field(FieldId::Consent);
    }

    /// Pick a query type and fire the radio group's change event
    pub fn select_query_type(&mut self, choice: QueryType) {
        self.state.field_mut(FieldId::QueryType).select(Some(choice));
        self.validate_field(FieldId::QueryType);
    }

    /// Advance the selection to the next option (first option when empty)
    pub fn cycle_query_type(&mut self) {
        let next = self
            .state
            .field(FieldId::QueryType)
            .as_choice()
            .map(|c| c.next())
            .unwrap_or(QueryType::GeneralEnquiry);
        self.select_query_type(next);
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.state.active_field_mut() else {
            return;
        };
        if !field.id.is_text() {
            return;
        }
        field.push_char(c);
        let id = field.id;
        self.handle_event(FormEvent::Input(id));
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.state.active_field_mut() else {
            return;
        };
        if !field.id.is_text() {
            return;
        }
        field.pop_char();
        let id = field.id;
        self.handle_event(FormEvent::Input(id));
    }

    /// Move focus to `slot`, blurring the field that loses it
    pub fn focus_slot(&mut self, slot: usize) {
        let previous = self.state.active_field();
        self.state.set_active_slot(slot);
        let current = self.state.active_field();
        if let Some(field) = previous.filter(|f| Some(*f) != current) {
            self.handle_event(FormEvent::Blur(field));
        }
    }

    pub fn focus_next(&mut self) {
        let slot = (self.state.active_field_index + 1) % self.state.slot_count();
        self.focus_slot(slot);
    }

    pub fn focus_prev(&mut self) {
        let count = self.state.slot_count();
        let slot = (self.state.active_field_index + count - 1) % count;
        self.focus_slot(slot);
    }

    /// Run the scheduled notification hide if it is due
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notification.tick(&mut self.view, now)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss(&mut self.view);
    }
}
