//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut
/// Ctrl+S works on all platforms (terminals rarely forward Cmd)
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// - macOS: "Ctrl+S" (Cmd is captured by the terminal emulator)
/// - Linux/Windows: "^S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "^S";
