//! Keystroke-driven suggestion session.
//!
//! A [`Session`] holds the text typed so far and, after every editing key,
//! asks the shared index for completions of that text, keeping only the top
//! few for display. It knows nothing about terminals; the front end feeds it
//! [`Key`] events and draws what [`render_lines`] produces.

use std::sync::Arc;

use tracing::debug;

use crate::config::display::DisplayConfig;
use crate::data_structures::{PrefixIndex, Suggestion};

/// A keystroke as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// The space bar
    Space,
    /// Delete the last character
    Backspace,
    /// Accept the input and finish
    Enter,
    /// Abort the session (Ctrl-C)
    Interrupt,
    /// Any key with no editing effect
    Other,
}

/// Outcome of applying one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The input may have changed; these are the suggestions to show
    Updated(Vec<Suggestion>),
    /// The session is over
    Finished,
}

/// Interactive completion state over a shared index.
#[derive(Debug)]
pub struct Session {
    index: Arc<PrefixIndex>,
    display: DisplayConfig,
    input: String,
}

impl Session {
    /// Creates a session with empty input.
    pub fn new(index: Arc<PrefixIndex>, display: DisplayConfig) -> Self {
        Self {
            index,
            display,
            input: String::new(),
        }
    }

    /// Text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Display settings this session renders with.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Applies one keystroke.
    ///
    /// Every key other than `Enter` and `Interrupt` triggers a fresh lookup,
    /// even when the input did not change. Backspace on empty input is a
    /// no-op on the text.
    pub fn apply(&mut self, key: Key) -> SessionEvent {
        match key {
            Key::Enter | Key::Interrupt => {
                debug!(?key, input = %self.input, "session finished");
                return SessionEvent::Finished;
            }
            Key::Char(c) => self.input.push(c),
            Key::Space => self.input.push(' '),
            Key::Backspace => {
                self.input.pop();
            }
            Key::Other => {}
        }

        SessionEvent::Updated(self.current_suggestions())
    }

    /// Top suggestions for the current input.
    pub fn current_suggestions(&self) -> Vec<Suggestion> {
        let mut suggestions = self.index.suggest(&self.input);
        let total = suggestions.len();
        suggestions.truncate(self.display.max_suggestions);
        debug!(input = %self.input, total, shown = suggestions.len(), "suggestions updated");
        suggestions
    }
}

/// Lays out the input line followed by the suggestion block.
///
/// The header and list are omitted when there are no suggestions.
pub fn render_lines(input: &str, suggestions: &[Suggestion], display: &DisplayConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(suggestions.len() + 2);
    lines.push(input.to_string());

    if suggestions.is_empty() {
        return lines;
    }

    lines.push(display.header.clone());
    for suggestion in suggestions {
        if display.show_definitions {
            lines.push(format!("- {suggestion}"));
        } else {
            lines.push(format!("- {}", suggestion.word));
        }
    }
    lines
}
