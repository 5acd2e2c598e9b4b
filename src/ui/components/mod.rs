//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_success_toast;

#[cfg(test)]
pub use dialog::{SUCCESS_MESSAGE, SUCCESS_TITLE};
