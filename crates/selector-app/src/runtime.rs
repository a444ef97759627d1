//! Generic runtime for application orchestration.
//!
//! The Runtime drives the single-consumer event loop, coordinating between:
//! - [`App`]: UI state machine, the only owner of selection state
//! - [`Driver`]: Platform-specific I/O
//!
//! Exactly one event is taken from the driver and fully processed (state
//! change plus redraw, or shutdown) before the next one is awaited.

use crate::{App, AppAction, Driver};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed this option.
    Selected(String),
    /// An interrupt ended the session.
    Interrupted,
    /// The driver ran out of events.
    Closed,
}

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and app.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop.
    ///
    /// Draws the initial screen, then processes events until the session
    /// ends. [`Driver::stop`] runs on every exit path, errors included.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<Outcome, D::Error> {
        let result = self.event_loop().await;
        let stopped = self.driver.stop();

        let outcome = result?;
        stopped?;
        tracing::info!(?outcome, "session ended");
        Ok(outcome)
    }

    async fn event_loop(&mut self) -> Result<Outcome, D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let Some(event) = self.driver.poll_event().await? else {
                tracing::debug!("driver closed");
                return Ok(Outcome::Closed);
            };

            tracing::trace!(?event, "processing event");
            let actions = self.app.handle(event);
            if let Some(outcome) = self.process_actions(actions)? {
                return Ok(outcome);
            }
        }
    }

    /// Execute actions in order. Returns the outcome if one ends the session.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<Option<Outcome>, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Echo(c) => self.driver.echo(c)?,
                AppAction::Erase => self.driver.erase()?,
                AppAction::Select(option) => return Ok(Some(Outcome::Selected(option))),
                AppAction::Quit => return Ok(Some(Outcome::Interrupted)),
            }
        }
        Ok(None)
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
