//! Terminal mode management.
//!
//! [`TerminalMode`] scopes raw mode and the alternate screen for one
//! session. Restoration is tracked by a process-wide flag so that drop, an
//! explicit [`TerminalMode::restore`] and the panic hook can all run it and
//! only the first one touches the terminal.

use std::{
    io::{self, stdout},
    panic,
    sync::atomic::{AtomicBool, Ordering},
};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};
use thiserror::Error;

/// Set while raw mode is active and not yet restored.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Raw mode could not be enabled. Nothing on screen was changed.
    #[error("failed to enter raw mode: {0}")]
    RawMode(#[source] io::Error),

    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Raw-mode session on the controlling terminal.
///
/// Restores the terminal on drop.
#[derive(Debug)]
pub struct TerminalMode {
    interactive: bool,
}

impl TerminalMode {
    /// Enter raw mode and the alternate screen if stdin is a terminal.
    ///
    /// When stdin is not a terminal nothing is changed and the returned mode
    /// reports itself as non-interactive.
    pub fn enter() -> Result<Self, TerminalError> {
        if !io::stdin().is_tty() {
            tracing::info!("stdin is not a terminal, running non-interactive");
            return Ok(Self::non_interactive());
        }

        enable_raw_mode().map_err(TerminalError::RawMode)?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        install_panic_hook();

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            let _ = restore_terminal();
            return Err(TerminalError::Io(e));
        }

        tracing::debug!("entered raw mode");
        Ok(Self { interactive: true })
    }

    /// Mode that leaves the terminal untouched.
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    /// Whether raw mode was entered.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Leave raw mode and the alternate screen. Safe to call repeatedly.
    pub fn restore(&mut self) -> Result<(), TerminalError> {
        Ok(restore_terminal()?)
    }
}

impl Drop for TerminalMode {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Undo [`TerminalMode::enter`] if it is still in effect.
///
/// Both steps are attempted even if the first fails.
pub fn restore_terminal() -> io::Result<()> {
    if !RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }

    let raw = disable_raw_mode();
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    tracing::debug!("terminal restored");
    raw.and(screen)
}

/// Restore the terminal before the default hook prints the panic message.
///
/// Release builds abort on panic, so drop glue never runs there.
fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
