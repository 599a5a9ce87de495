//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the address search shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEARCH_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEARCH_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Address search shortcut display
/// - macOS: "Cmd+F"
/// - Linux/Windows: "Ctrl+F"
#[cfg(target_os = "macos")]
pub const SEARCH_SHORTCUT: &str = "Cmd+F";

#[cfg(not(target_os = "macos"))]
pub const SEARCH_SHORTCUT: &str = "Ctrl+F";
