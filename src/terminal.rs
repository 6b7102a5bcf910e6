//! Raw-mode terminal front end.
//!
//! Reads keystrokes one at a time, feeds them to a [`Session`], and redraws
//! the input line and suggestion block in place after each key.

use std::io::{self, Write};

use termion::event::Key as TermKey;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use tracing::debug;

use crate::error::SuggestResult;
use crate::session::{render_lines, Key, Session, SessionEvent};

/// Prompt printed once before the first keystroke.
pub const PROMPT: &str = "Type a word (press 'Enter' to exit):";

/// Maps a terminal key to a session key.
pub fn map_key(key: TermKey) -> Key {
    match key {
        TermKey::Char('\n') | TermKey::Char('\r') => Key::Enter,
        TermKey::Char(' ') => Key::Space,
        TermKey::Char(c) if !c.is_control() => Key::Char(c),
        TermKey::Backspace | TermKey::Ctrl('h') => Key::Backspace,
        TermKey::Ctrl('c') => Key::Interrupt,
        _ => Key::Other,
    }
}

/// Runs an interactive session on the controlling terminal.
///
/// # Returns
///
/// The final input when the user pressed Enter or Ctrl-C.
pub fn run(session: &mut Session) -> SuggestResult<String> {
    let stdin = io::stdin();
    let columns = termion::terminal_size().ok().map(|(columns, _)| columns);
    let mut stdout = io::stdout().into_raw_mode()?;
    drive(session, stdin.keys(), &mut stdout, columns)?;
    Ok(session.input().to_string())
}

/// Feeds `keys` to `session`, drawing every update to `out`.
///
/// `columns` is the terminal width used to account for lines that wrap; with
/// `None` every line is assumed to fit on one row. Raw mode does not
/// translate `\n`, so lines are ended with `\r\n`.
pub fn drive<I, W>(
    session: &mut Session,
    keys: I,
    out: &mut W,
    columns: Option<u16>,
) -> SuggestResult<()>
where
    I: IntoIterator<Item = io::Result<TermKey>>,
    W: Write,
{
    write!(out, "{PROMPT}\r\n")?;
    out.flush()?;

    let mut drawn = 0usize;
    for key in keys {
        let key = map_key(key?);
        match session.apply(key) {
            SessionEvent::Updated(suggestions) => {
                let lines = render_lines(session.input(), &suggestions, session.display());
                redraw(out, drawn, &lines)?;
                drawn = rows(&lines, columns);
            }
            SessionEvent::Finished => break,
        }
    }

    write!(out, "\r\n")?;
    out.flush()?;
    debug!(input = %session.input(), "terminal session closed");
    Ok(())
}

/// Number of terminal rows `lines` occupy at the given width.
///
/// Width is counted in characters, so double-width glyphs are undercounted.
fn rows(lines: &[String], columns: Option<u16>) -> usize {
    match columns.filter(|&c| c > 0) {
        Some(columns) => lines
            .iter()
            .map(|line| line.chars().count().div_ceil(usize::from(columns)).max(1))
            .sum(),
        None => lines.len(),
    }
}

/// Replaces the previously drawn block spanning `drawn` rows with `lines`.
fn redraw<W: Write>(out: &mut W, drawn: usize, lines: &[String]) -> io::Result<()> {
    if drawn > 1 {
        let up = u16::try_from(drawn - 1).unwrap_or(u16::MAX);
        write!(out, "{}", termion::cursor::Up(up))?;
    }
    write!(out, "\r{}", termion::clear::AfterCursor)?;
    write!(out, "{}", lines.join("\r\n"))?;
    out.flush()
}
