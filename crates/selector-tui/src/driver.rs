//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait over the reader thread's key channel, OS
//! signals and an ANSI output stream.

use std::io::{Stdout, Write};

use selector_app::{App, AppEvent, Driver, KeyInput};
use tokio::sync::mpsc;

use crate::{
    render::{self, WindowSize},
    signals::Signals,
    terminal::{TerminalError, TerminalMode},
};

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the terminal mode for the session; [`Driver::stop`] gives the
/// terminal back.
pub struct TerminalDriver<W = Stdout> {
    out: W,
    keys: mpsc::Receiver<KeyInput>,
    keys_open: bool,
    signals: Signals,
    signals_open: bool,
    mode: TerminalMode,
    stopped: bool,
}

impl<W: Write + Send> TerminalDriver<W> {
    /// Create a driver writing to `out`.
    pub fn new(
        out: W,
        keys: mpsc::Receiver<KeyInput>,
        signals: Signals,
        mode: TerminalMode,
    ) -> Self {
        Self { out, keys, keys_open: true, signals, signals_open: true, mode, stopped: false }
    }

    /// Whether the session runs in raw mode.
    pub fn is_interactive(&self) -> bool {
        self.mode.is_interactive()
    }
}

impl<W: Write + Send> Driver for TerminalDriver<W> {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                // OS signals
                signal = self.signals.recv(), if self.signals_open => match signal {
                    Some(event) => return Ok(Some(event)),
                    None => {
                        tracing::warn!("signal streams closed");
                        self.signals_open = false;
                    },
                },

                // Decoded keys
                key = self.keys.recv(), if self.keys_open => match key {
                    Some(key) => return Ok(Some(AppEvent::Key(key))),
                    None => {
                        tracing::debug!("input closed, waiting for signals only");
                        self.keys_open = false;
                    },
                },

                else => return Ok(None),
            }
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        render::render(&mut self.out, app, WindowSize::query())?;
        Ok(())
    }

    fn echo(&mut self, c: char) -> Result<(), Self::Error> {
        render::echo(&mut self.out, c)?;
        Ok(())
    }

    fn erase(&mut self) -> Result<(), Self::Error> {
        render::erase(&mut self.out)?;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;

        let cleared = render::clear(&mut self.out);
        self.mode.restore()?;
        Ok(cleared?)
    }
}
