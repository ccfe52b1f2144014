//! Command pattern for key event handling in the host application.
//!
//! Host-level keys (quit, currency preference) are mapped here. Everything
//! else is forwarded to the review component, which owns the info modal and
//! edit keys.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! match KeyMapper::map_key(key_event, &context) {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::SwitchPrimaryCurrency => app.switch_primary_currency(),
//!     AppCommand::Forward => { /* hand the event to the review */ }
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The review summary has focus.
    Review,
    /// The info modal is showing and captures review input.
    InfoModal,
}

// ============================================================================
// App Commands
// ============================================================================

/// Commands handled by the host rather than the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// Flip and persist the primary currency preference.
    SwitchPrimaryCurrency,
    /// Not a host key; pass the event on to the review.
    Forward,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to host commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a host command.
    ///
    /// Pure: no state is touched.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match (context, key.code) {
            (_, KeyCode::Char('q')) => AppCommand::Quit,
            (InputContext::Review, KeyCode::Char('c')) => AppCommand::SwitchPrimaryCurrency,
            _ => AppCommand::Forward,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
