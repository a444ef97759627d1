//! OS signals that feed the event loop.

use std::io;

use selector_app::AppEvent;

/// Window-resize and interrupt notifications.
///
/// Must be created inside a tokio runtime with the signal driver enabled.
#[cfg(unix)]
pub struct Signals {
    resize: tokio::signal::unix::Signal,
    interrupt: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Signals {
    /// Register handlers for SIGWINCH and SIGINT.
    pub fn new() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            resize: signal(SignalKind::window_change())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    /// Wait for the next signal. `None` once both streams have closed.
    pub async fn recv(&mut self) -> Option<AppEvent> {
        tokio::select! {
            Some(()) = self.resize.recv() => Some(AppEvent::Resize),
            Some(()) = self.interrupt.recv() => Some(AppEvent::Interrupt),
            else => None,
        }
    }
}

/// Interrupt notifications. Resize is only observable on unix.
#[cfg(not(unix))]
#[derive(Debug)]
pub struct Signals;

#[cfg(not(unix))]
impl Signals {
    /// Register the Ctrl-C handler.
    pub fn new() -> io::Result<Self> {
        Ok(Self)
    }

    /// Wait for the next signal.
    pub async fn recv(&mut self) -> Option<AppEvent> {
        tokio::signal::ctrl_c().await.ok().map(|()| AppEvent::Interrupt)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::{process::Command, time::Duration};

    use super::*;

    fn raise(signal: &str) {
        let status = Command::new("kill").args([signal, &std::process::id().to_string()]).status();
        assert!(status.is_ok_and(|s| s.success()));
    }

    async fn next(signals: &mut Signals) -> Option<AppEvent> {
        tokio::time::timeout(Duration::from_secs(5), signals.recv()).await.ok().flatten()
    }

    // SIGINT is covered in tests/signal_test.rs, away from tests that run a
    // whole session in this process.
    #[tokio::test]
    async fn window_change_becomes_resize() {
        let mut signals = Signals::new().expect("register signal handlers");

        raise("-WINCH");
        assert_eq!(next(&mut signals).await, Some(AppEvent::Resize));
    }
}
