//! UI state machine
//!
//! Pure state machine that processes decoded keys and OS signals, producing
//! actions for the runtime to execute. Completely decoupled from I/O.
//!
//! # Architecture
//!
//! The App wraps a [`SelectionState`] and the session title. Terminal bytes
//! are decoded before they get here and drawing happens after, so every
//! transition can be exercised without a terminal.

use crate::{AppAction, AppEvent, KeyInput, SelectionState};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Accepting input.
    Running,
    /// A confirm or interrupt ended the session.
    Terminated,
}

/// UI state machine.
///
/// Owns the session title and selection state. Pure and testable.
#[derive(Debug, Clone)]
pub struct App {
    /// Prompt shown before the search text.
    title: String,
    /// Options, highlight and search buffer.
    selection: SelectionState,
    /// Session lifecycle.
    status: Status,
}

impl App {
    /// Create a running App over `options`, highlighting the first.
    pub fn new(title: String, options: Vec<String>) -> Self {
        Self { title, selection: SelectionState::new(options), status: Status::Running }
    }

    /// Process an event and return actions for the runtime.
    ///
    /// A terminated App ignores everything.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        if self.status == Status::Terminated {
            return vec![];
        }

        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize => vec![AppAction::Render],
            AppEvent::Interrupt => self.interrupt(),
        }
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Up => {
                self.selection.select_previous();
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.selection.select_next();
                vec![AppAction::Render]
            },
            KeyInput::Char(c) => {
                self.selection.push_search(c);
                vec![AppAction::Echo(c), AppAction::Render]
            },
            KeyInput::Backspace => {
                if self.selection.pop_search() {
                    vec![AppAction::Erase, AppAction::Render]
                } else {
                    vec![AppAction::Render]
                }
            },
            KeyInput::Enter => {
                self.status = Status::Terminated;
                tracing::debug!(selected = %self.selection.current(), "selection confirmed");
                vec![AppAction::Select(self.selection.current().to_owned())]
            },
            KeyInput::Interrupt => self.interrupt(),
        }
    }

    fn interrupt(&mut self) -> Vec<AppAction> {
        self.status = Status::Terminated;
        tracing::debug!("session interrupted");
        vec![AppAction::Quit]
    }

    /// Prompt shown before the search text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Options, highlight and search buffer.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Session lifecycle.
    pub fn status(&self) -> Status {
        self.status
    }
}
