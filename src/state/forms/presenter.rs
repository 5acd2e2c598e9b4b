//! Error annotations on form controls

use super::field::FieldId;
use super::view::FormView;

/// Mark the field's control as errored and show `message` under it.
///
/// Does nothing when the control or its error display is not registered.
pub fn show_error<V: FormView + ?Sized>(view: &mut V, field: FieldId, message: &str) {
    if !view.has_control(field) || !view.has_error_display(field) {
        return;
    }
    view.set_control_errored(field, true);
    view.set_error_text(field, message);
    view.set_error_visible(field, true);
}

/// Remove the errored state and hide the field's error display.
///
/// Same lookup contract as [`show_error`].
pub fn clear_error<V: FormView + ?Sized>(view: &mut V, field: FieldId) {
    if !view.has_control(field) || !view.has_error_display(field) {
        return;
    }
    view.set_control_errored(field, false);
    view.set_error_text(field, "");
    view.set_error_visible(field, false);
}
