//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the whole screen.
    Render,

    /// Echo a typed character at the cursor.
    Echo(char),

    /// Erase one column before the cursor.
    Erase,

    /// Confirm the selection and end the session.
    Select(String),

    /// End the session without a selection.
    Quit,
}
