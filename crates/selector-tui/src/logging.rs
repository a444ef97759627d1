//! Log setup.
//!
//! The screen belongs to the picker, so logs only ever go to a file.

use std::{
    fs::{File, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("failed to open log file: {0}")]
    Io(#[from] io::Error),

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Without `file` this does
/// nothing.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let Some(path) = file else {
        return Ok(());
    };

    let file = open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "selector starting");
    Ok(())
}

fn open(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
