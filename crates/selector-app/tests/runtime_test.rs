//! End-to-end tests for the event loop.
//!
//! # Test Strategy
//!
//! A scripted [`Driver`] replays raw terminal bytes through the real
//! decoder and records everything the runtime asks it to do. Tests then
//! check the outcome and the transcript, the same way a user would observe
//! the screen.

use std::{collections::VecDeque, convert::Infallible};

use selector_app::{App, AppEvent, Driver, Outcome, Runtime, keys};

/// Output operations recorded by the scripted driver.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    /// A full redraw with the highlighted option and search text at that time.
    Render { current: String, search: String },
    Echo(char),
    Erase,
    Stop,
}

#[derive(Debug, Default)]
struct ScriptedDriver {
    events: VecDeque<AppEvent>,
    ops: Vec<Op>,
}

impl ScriptedDriver {
    /// Queue the keys decoded from raw terminal bytes.
    fn typing(bytes: &[u8]) -> Self {
        Self { events: keys(bytes).map(AppEvent::Key).collect(), ops: Vec::new() }
    }

    fn then(mut self, event: AppEvent) -> Self {
        self.events.push_back(event);
        self
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.ops.push(Op::Render {
            current: app.selection().current().to_owned(),
            search: app.selection().search().to_owned(),
        });
        Ok(())
    }

    fn echo(&mut self, c: char) -> Result<(), Self::Error> {
        self.ops.push(Op::Echo(c));
        Ok(())
    }

    fn erase(&mut self) -> Result<(), Self::Error> {
        self.ops.push(Op::Erase);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.ops.push(Op::Stop);
        Ok(())
    }
}

fn app(options: &[&str]) -> App {
    App::new("Pick".into(), options.iter().map(ToString::to_string).collect())
}

fn renders(ops: &[Op]) -> usize {
    ops.iter().filter(|op| matches!(op, Op::Render { .. })).count()
}

/// Run a session to completion, returning its outcome and output transcript.
async fn run(driver: ScriptedDriver, app: App) -> (Outcome, Vec<Op>) {
    let mut runtime = Runtime::new(driver, app);
    let outcome = match runtime.run().await {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    };
    (outcome, runtime.driver().ops.clone())
}

#[tokio::test]
async fn confirm_without_navigation_selects_first() {
    let (outcome, ops) = run(ScriptedDriver::typing(b"\r"), app(&["x", "y", "z"])).await;

    assert_eq!(outcome, Outcome::Selected("x".into()));
    assert_eq!(ops, vec![
        Op::Render { current: "x".into(), search: String::new() },
        Op::Stop
    ]);
}

#[tokio::test]
async fn arrows_wrap_and_confirm_picks_highlight() {
    let (outcome, _) =
        run(ScriptedDriver::typing(b"\x1b[A\x1b[A\x1b[B\x1b[B\r"), app(&["x", "y", "z"])).await;

    assert_eq!(outcome, Outcome::Selected("x".into()));
}

#[tokio::test]
async fn search_echoes_and_highlights_first_match() {
    let (outcome, ops) =
        run(ScriptedDriver::typing(b"ap\r"), app(&["banana", "apple", "apricot"])).await;

    assert_eq!(outcome, Outcome::Selected("apple".into()));
    assert_eq!(&ops[1..5], &[
        Op::Echo('a'),
        Op::Render { current: "banana".into(), search: "a".into() },
        Op::Echo('p'),
        Op::Render { current: "apple".into(), search: "ap".into() },
    ]);
}

#[tokio::test]
async fn commas_cannot_be_typed() {
    // Comma is punctuation, so typed text always forms a single search term.
    let (outcome, _) = run(ScriptedDriver::typing(b"re,lu\r"), app(&["red", "blue", "relu"])).await;

    assert_eq!(outcome, Outcome::Selected("relu".into()));
}

#[tokio::test]
async fn backspace_keeps_stale_highlight() {
    let (outcome, ops) = run(ScriptedDriver::typing(b"ac\x7f\r"), app(&["ab", "ac"])).await;

    assert_eq!(outcome, Outcome::Selected("ac".into()));
    assert!(ops.contains(&Op::Erase));
    assert!(ops.contains(&Op::Render { current: "ac".into(), search: "a".into() }));
}

#[tokio::test]
async fn invalid_input_causes_no_redraw() {
    let (_, ops) = run(ScriptedDriver::typing(b"!?,.\x1b[C\r"), app(&["a", "b"])).await;

    // Only the initial draw: nothing in the input decoded to an event before Enter.
    assert_eq!(renders(&ops), 1);
}

#[tokio::test]
async fn resize_redraws_without_state_change() {
    let driver = ScriptedDriver::default().then(AppEvent::Resize).then(AppEvent::Resize);
    let (outcome, ops) = run(driver, app(&["a", "b"])).await;

    assert_eq!(outcome, Outcome::Closed);
    assert_eq!(renders(&ops), 3);
    assert_eq!(ops.last(), Some(&Op::Stop));
}

#[tokio::test]
async fn interrupt_signal_stops_terminal() {
    let driver = ScriptedDriver::typing(b"\x1b[B").then(AppEvent::Interrupt);
    let (outcome, ops) = run(driver, app(&["a", "b"])).await;

    assert_eq!(outcome, Outcome::Interrupted);
    assert_eq!(ops.last(), Some(&Op::Stop));
}

#[tokio::test]
async fn ctrl_c_byte_interrupts() {
    let (outcome, _) = run(ScriptedDriver::typing(b"a\x03\r"), app(&["a"])).await;

    assert_eq!(outcome, Outcome::Interrupted);
}

#[tokio::test]
async fn empty_option_list_confirms_empty_string() {
    let (outcome, _) = run(ScriptedDriver::typing(b"\x1b[Bq\r"), app(&[])).await;

    assert_eq!(outcome, Outcome::Selected(String::new()));
}
