//! Process result of a finished session.

use std::io::{self, Write};

use selector_app::Outcome;

/// Exit status after a confirmed selection.
pub const SUCCESS: u8 = 0;
/// Exit status for interrupts, closed input and errors.
pub const FAILURE: u8 = 1;

/// Write what `outcome` prints and return the exit status.
///
/// Only a selection produces output: the option and a newline. Call this
/// after the terminal has been restored.
pub fn finish<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<u8> {
    match outcome {
        Outcome::Selected(option) => {
            writeln!(out, "{option}")?;
            out.flush()?;
            Ok(SUCCESS)
        },
        Outcome::Interrupted | Outcome::Closed => Ok(FAILURE),
    }
}
