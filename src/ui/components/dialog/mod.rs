//! Dialog components for TUI

mod base;
mod success_toast;

pub use success_toast::render_success_toast;

#[cfg(test)]
pub use success_toast::{SUCCESS_MESSAGE, SUCCESS_TITLE};
