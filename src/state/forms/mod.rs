//! Form domain layer
//!
//! Field values and validity live in `FormState`, the rules in `validators`,
//! and the visible error annotations in the `FormView` the presenter writes
//! to. `ContactForm` ties them together and runs the submit lifecycle.

mod contact_form;
mod field;
mod form_state;
mod form_validator;
mod presenter;
mod validators;
mod view;

pub use contact_form::{ContactForm, FormEvent, SubmitEvent};
pub use field::{FieldId, FormField, QueryType};
pub use view::{FieldRegistry, FormView};

#[cfg(test)]
pub use contact_form::SubmitOutcome;
#[cfg(test)]
pub use field::Validity;
#[cfg(test)]
pub use view::MockFormView;
