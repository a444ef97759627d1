//! Application layer for selector
//!
//! Pure state machines and generic runtime for the interactive picker,
//! enabling deterministic testing with the same code that runs against a
//! real terminal.
//!
//! # Components
//!
//! - [`Decoder`]: Raw input bytes to logical keys
//! - [`SelectionState`]: Options, highlight and search buffer
//! - [`search_options`]: Comma-separated substring filter
//! - [`App`]: UI state machine (keys and signals to actions)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic single-consumer event loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
pub mod decoder;
mod driver;
mod event;
pub mod filter;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, Status};
pub use decoder::{Decoder, Runes, is_valid_input, keys};
pub use driver::Driver;
pub use event::AppEvent;
pub use filter::search_options;
pub use input::KeyInput;
pub use runtime::{Outcome, Runtime};
pub use state::SelectionState;
