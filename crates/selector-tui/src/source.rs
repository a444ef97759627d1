//! Where the options come from.
//!
//! Piped stdin wins over the `--options` flag: when stdin is not a terminal
//! every line read from it becomes an option.

use std::io::{self, BufRead};

use crossterm::tty::IsTty;
use thiserror::Error;

/// Option sourcing errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading piped stdin failed.
    #[error("error reading input: {0}")]
    Read(#[from] io::Error),
}

/// Collect the session's options.
///
/// # Errors
///
/// Returns [`SourceError::Read`] if piped stdin cannot be read to the end.
pub fn read_options(static_options: Option<&str>) -> Result<Vec<String>, SourceError> {
    let stdin = io::stdin();
    if stdin.is_tty() {
        return Ok(static_options.map(from_static).unwrap_or_default());
    }

    let options = from_reader(stdin.lock())?;
    tracing::debug!(count = options.len(), "read options from stdin");
    Ok(options)
}

/// One option per line until end of input. `\n` and `\r\n` terminators are
/// stripped; invalid UTF-8 is replaced rather than rejected.
pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Vec<String>, SourceError> {
    let mut options = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(options);
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        options.push(String::from_utf8_lossy(&line).into_owned());
    }
}

/// Split the `--options` value on newlines.
///
/// Surrounding whitespace is trimmed first. A present but empty value is a
/// single empty option.
pub fn from_static(options: &str) -> Vec<String> {
    options.trim().split('\n').map(str::to_owned).collect()
}
