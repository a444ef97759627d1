//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive
//! the [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - Decoded keyboard input from the reader thread.
//! - OS signals (window resize, interrupt).

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal window was resized. Size is re-queried on render.
    Resize,

    /// Interrupt signal received.
    Interrupt,
}
