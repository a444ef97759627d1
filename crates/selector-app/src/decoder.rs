//! Raw terminal input decoding.
//!
//! Raw mode delivers keystrokes as an unframed byte stream. [`Runes`] turns
//! bytes into Unicode scalar values and [`Decoder`] folds those into
//! [`KeyInput`]s, carrying escape-sequence state across calls so an arrow key
//! is only emitted once its final byte has arrived.
//!
//! Nothing here reports errors. Malformed escape sequences and characters
//! outside the searchable set are dropped, and a failed read ends the stream
//! the same way end-of-input does.

use std::{
    collections::VecDeque,
    io::{self, Read},
};

use crate::KeyInput;

const END_OF_TEXT: char = '\u{3}';
const CARRIAGE_RETURN: char = '\r';
const ESCAPE: char = '\u{1b}';
const DELETE: char = '\u{7f}';
const CSI_INTRODUCER: char = '[';

/// Iterator of chars decoded from a UTF-8 byte stream.
///
/// A byte that does not begin a valid sequence yields one
/// [`char::REPLACEMENT_CHARACTER`] and only that byte is consumed: the bytes
/// read after it while trying to complete the sequence are decoded again.
#[derive(Debug)]
pub struct Runes<R> {
    bytes: io::Bytes<R>,
    /// Bytes read past a failed lead byte, replayed before reading more.
    replay: VecDeque<u8>,
}

impl<R: Read> Runes<R> {
    /// Wrap a byte reader.
    pub fn new(reader: R) -> Self {
        Self { bytes: reader.bytes(), replay: VecDeque::new() }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.replay.pop_front() {
            return Some(byte);
        }

        loop {
            match self.bytes.next()? {
                Ok(byte) => return Some(byte),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {},
                Err(e) => {
                    tracing::debug!(error = %e, "input read failed, treating as end of input");
                    return None;
                },
            }
        }
    }
}

impl<R: Read> Iterator for Runes<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let lead = self.next_byte()?;
        let len = sequence_len(lead);
        if len == 1 {
            return Some(char::from(lead));
        }
        if len == 0 {
            return Some(char::REPLACEMENT_CHARACTER);
        }

        let mut buf = [lead, 0, 0, 0];
        let mut filled = 1;
        while filled < len {
            let Some(byte) = self.next_byte() else { break };
            buf[filled] = byte;
            filled += 1;
            if !is_continuation(byte) {
                break;
            }
        }

        let decoded = std::str::from_utf8(&buf[..filled]).ok().and_then(|s| s.chars().next());
        match decoded {
            Some(c) if filled == len => Some(c),
            _ => {
                // Replay in front of anything still queued from an earlier failure.
                for &byte in buf[1..filled].iter().rev() {
                    self.replay.push_front(byte);
                }
                Some(char::REPLACEMENT_CHARACTER)
            },
        }
    }
}

/// Encoded length implied by a lead byte. Zero for bytes that cannot start a
/// sequence.
fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xc0 == 0x80
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum State {
    #[default]
    Ground,
    /// ESC seen, waiting for the first continuation char.
    Escape,
    /// ESC and one continuation char seen, waiting for the final char.
    EscapeFinal(char),
}

/// Stateful char-to-key decoder.
#[derive(Debug, Default)]
pub struct Decoder {
    state: State,
}

impl Decoder {
    /// Create a decoder in the ground state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one char. Returns the key it completes, if any.
    ///
    /// An ESC always swallows exactly the next two chars; only `[A` and `[B`
    /// produce a key.
    pub fn feed(&mut self, c: char) -> Option<KeyInput> {
        match std::mem::take(&mut self.state) {
            State::Ground => self.ground(c),
            State::Escape => {
                self.state = State::EscapeFinal(c);
                None
            },
            State::EscapeFinal(intro) => match (intro, c) {
                (CSI_INTRODUCER, 'A') => Some(KeyInput::Up),
                (CSI_INTRODUCER, 'B') => Some(KeyInput::Down),
                _ => {
                    tracing::trace!(?intro, final_char = ?c, "discarding escape sequence");
                    None
                },
            },
        }
    }

    /// Whether the decoder is in the middle of an escape sequence.
    pub fn in_escape(&self) -> bool {
        self.state != State::Ground
    }

    fn ground(&mut self, c: char) -> Option<KeyInput> {
        match c {
            CARRIAGE_RETURN => Some(KeyInput::Enter),
            DELETE => Some(KeyInput::Backspace),
            END_OF_TEXT => Some(KeyInput::Interrupt),
            ESCAPE => {
                self.state = State::Escape;
                None
            },
            c if is_valid_char(c) => Some(KeyInput::Char(c)),
            _ => None,
        }
    }
}

/// Iterator of keys decoded from a raw byte stream.
#[derive(Debug)]
pub struct Keys<R> {
    runes: Runes<R>,
    decoder: Decoder,
}

impl<R: Read> Iterator for Keys<R> {
    type Item = KeyInput;

    fn next(&mut self) -> Option<KeyInput> {
        loop {
            let Some(c) = self.runes.next() else {
                if self.decoder.in_escape() {
                    tracing::trace!("input ended inside an escape sequence");
                }
                return None;
            };
            if let Some(key) = self.decoder.feed(c) {
                return Some(key);
            }
        }
    }
}

/// Decode keys from a raw byte stream until it ends.
pub fn keys<R: Read>(reader: R) -> Keys<R> {
    Keys { runes: Runes::new(reader), decoder: Decoder::new() }
}

/// Whether every char of `input` may be typed into the search buffer.
///
/// Accepts letters of any script (Han ideographs included), whitespace and
/// numerals. The empty string is accepted.
pub fn is_valid_input(input: &str) -> bool {
    input.chars().all(is_valid_char)
}

fn is_valid_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || c.is_numeric()
}
