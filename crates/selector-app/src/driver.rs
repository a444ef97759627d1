//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the event loop from the terminal. The TUI
//! implements it over raw stdin, signals and stdout; tests implement it with
//! scripted events and recorded output, running the same [`crate::Runtime`].

use std::future::Future;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// # Implementations
///
/// - **TUI**: reader thread for decoded keys, unix signals, ANSI output
/// - **Tests**: a queue of events and an in-memory transcript
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next event.
    ///
    /// Returns `None` once no further event can ever arrive.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Redraw the whole screen from application state.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Echo a typed character at the cursor.
    fn echo(&mut self, c: char) -> Result<(), Self::Error>;

    /// Erase one column before the cursor.
    fn erase(&mut self) -> Result<(), Self::Error>;

    /// Clear the screen and give the terminal back. Must be idempotent.
    fn stop(&mut self) -> Result<(), Self::Error>;
}
