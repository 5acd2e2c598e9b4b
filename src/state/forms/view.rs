//! Display state of the form controls
//!
//! `FormView` is the surface the form logic writes to. `FieldRegistry` is the
//! concrete view: one entry per field holding the control and its error
//! display, built once at startup and read by the renderer every frame.

use super::field::FieldId;
use std::collections::HashMap;

/// Host surface mutated by the presenter and the notification timer
#[cfg_attr(test, mockall::automock)]
pub trait FormView {
    /// Whether the field's control can be resolved
    fn has_control(&self, field: FieldId) -> bool;

    /// Whether the field's error display can be resolved
    fn has_error_display(&self, field: FieldId) -> bool;

    /// Add or remove the errored indicator on a control
    fn set_control_errored(&mut self, field: FieldId, errored: bool);

    /// Replace the text of an error display
    fn set_error_text(&mut self, field: FieldId, text: &str);

    /// Show or hide an error display
    fn set_error_visible(&mut self, field: FieldId, visible: bool);

    /// Add or remove the shown indicator on the success notification
    fn set_notification_shown(&mut self, shown: bool);
}

/// Visual state of a field's input control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    pub errored: bool,
}

/// Visual state of the error line under a control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub text: String,
    pub visible: bool,
}

/// Control and error display registered for one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldHandles {
    pub control: Option<ControlState>,
    pub error_display: Option<ErrorDisplay>,
}

/// Field registry backing the rendered form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    fields: HashMap<FieldId, FieldHandles>,
    notification_shown: bool,
}

impl FieldRegistry {
    /// Registry with a control and an error display for every field
    pub fn new() -> Self {
        let mut registry = Self::default();
        for field in FieldId::ALL {
            registry.register(field);
        }
        registry
    }

    /// Register a field with a fresh control and error display
    pub fn register(&mut self, field: FieldId) -> &mut FieldHandles {
        let handles = self.fields.entry(field).or_default();
        handles.control.get_or_insert_with(ControlState::default);
        handles.error_display.get_or_insert_with(ErrorDisplay::default);
        handles
    }

    pub fn handles(&self, field: FieldId) -> Option<&FieldHandles> {
        self.fields.get(&field)
    }

    pub fn is_errored(&self, field: FieldId) -> bool {
        self.handles(field)
            .and_then(|h| h.control.as_ref())
            .is_some_and(|c| c.errored)
    }

    /// Error text currently visible under the field, if any
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        self.handles(field)
            .and_then(|h| h.error_display.as_ref())
            .filter(|d| d.visible)
            .map(|d| d.text.as_str())
    }

    pub fn is_notification_shown(&self) -> bool {
        self.notification_shown
    }

    fn control_mut(&mut self, field: FieldId) -> Option<&mut ControlState> {
        self.fields.get_mut(&field).and_then(|h| h.control.as_mut())
    }

    fn error_display_mut(&mut self, field: FieldId) -> Option<&mut ErrorDisplay> {
        self.fields
            .get_mut(&field)
            .and_then(|h| h.error_display.as_mut())
    }
}

impl FormView for FieldRegistry {
    fn has_control(&self, field: FieldId) -> bool {
        self.handles(field).is_some_and(|h| h.control.is_some())
    }

    fn has_error_display(&self, field: FieldId) -> bool {
        self.handles(field)
            .is_some_and(|h| h.error_display.is_some())
    }

    fn set_control_errored(&mut self, field: FieldId, errored: bool) {
        if let Some(control) = self.control_mut(field) {
            control.errored = errored;
        }
    }

    fn set_error_text(&mut self, field: FieldId, text: &str) {
        if let Some(display) = self.error_display_mut(field) {
            display.text.clear();
            display.text.push_str(text);
        }
    }

    fn set_error_visible(&mut self, field: FieldId, visible: bool) {
        if let Some(display) = self.error_display_mut(field) {
            display.visible = visible;
        }
    }

    fn set_notification_shown(&mut self, shown: bool) {
        self.notification_shown = shown;
    }
}
