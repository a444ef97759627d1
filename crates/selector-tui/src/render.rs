//! Screen rendering
//!
//! Every redraw repaints the whole screen from [`App`] state: the prompt
//! line, then one padded row per option with the highlighted one in
//! reverse colours. The cursor is parked at the end of the prompt so echoed
//! characters continue the search text.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use selector_app::App;
use unicode_width::UnicodeWidthStr;

/// Background of the highlighted option (256-colour purple).
pub const HIGHLIGHT_BACKGROUND: Color = Color::AnsiValue(93);
/// Foreground of the highlighted option.
pub const HIGHLIGHT_FOREGROUND: Color = Color::White;

/// Raw mode disables output post-processing, so rows end with an explicit
/// carriage return.
const LINE_END: &str = "\n\r";
const PROMPT_SEPARATOR: &str = ": ";
/// Row width used when the terminal cannot report its size, on top of the
/// prompt width.
const FALLBACK_EXTRA_COLUMNS: usize = 43;
/// Backspace, blank, backspace.
const ERASE_SEQUENCE: &str = "\u{8} \u{8}";

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of rows.
    pub rows: u16,
    /// Number of columns.
    pub cols: u16,
}

impl WindowSize {
    /// Current size of the controlling terminal, if it can be determined.
    pub fn query() -> Option<Self> {
        crossterm::terminal::size().ok().map(|(cols, rows)| Self { rows, cols })
    }
}

/// Redraw the whole screen.
///
/// Row padding and the cursor column are measured in terminal cells, not
/// bytes, so wide characters in the title or search keep the cursor aligned.
pub fn render<W: Write>(out: &mut W, app: &App, size: Option<WindowSize>) -> io::Result<()> {
    let title = app.title();
    let selection = app.selection();
    let search = selection.search();

    let prompt_width = title.width() + search.width();
    let cols = match size {
        Some(size) if size.cols > 0 => usize::from(size.cols),
        _ => prompt_width + FALLBACK_EXTRA_COLUMNS,
    };

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!("{title}{PROMPT_SEPARATOR}{search}{LINE_END}"))
    )?;

    for option in selection.options() {
        if selection.is_current(option) {
            queue!(
                out,
                SetBackgroundColor(HIGHLIGHT_BACKGROUND),
                SetForegroundColor(HIGHLIGHT_FOREGROUND)
            )?;
        } else {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        let row = format!(" {option}");
        queue!(out, Print(format!("{row:<cols$}{LINE_END}")))?;
    }

    let cursor_col = u16::try_from(prompt_width + PROMPT_SEPARATOR.len()).unwrap_or(u16::MAX);
    queue!(out, SetAttribute(Attribute::Reset), MoveTo(cursor_col, 0))?;
    out.flush()
}

/// Print a typed character at the cursor.
pub fn echo<W: Write>(out: &mut W, c: char) -> io::Result<()> {
    queue!(out, Print(c))?;
    out.flush()
}

/// Blank out the column before the cursor and step back onto it.
pub fn erase<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Print(ERASE_SEQUENCE))?;
    out.flush()
}

/// Clear the screen and home the cursor.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}
