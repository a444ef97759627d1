//! Terminal-agnostic keyboard input.

/// Logical keyboard input.
///
/// Produced by the [`Decoder`](crate::Decoder) from raw terminal bytes so the
/// state machine never sees escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Searchable character (letter, digit or whitespace).
    Char(char),
    /// Enter/Return key (confirm the highlighted option).
    Enter,
    /// Backspace key (delete the last search character).
    Backspace,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Ctrl-C byte. Raw mode turns off the tty's own SIGINT generation.
    Interrupt,
}
