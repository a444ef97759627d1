//! Terminal frontend for selector
//!
//! A thin shell over [`selector_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`selector_app::Runtime`].
//!
//! This crate handles terminal modes, key and signal delivery, rendering and
//! the startup collaborators of the `selector` binary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod driver;
pub mod exit;
pub mod logging;
pub mod reader;
pub mod render;
pub mod signals;
pub mod source;
pub mod terminal;

pub use config::Config;
pub use driver::TerminalDriver;
pub use selector_app::{App, AppAction, AppEvent, Driver, KeyInput, Outcome, Runtime};
pub use signals::Signals;
pub use source::SourceError;
pub use terminal::{TerminalError, TerminalMode};
