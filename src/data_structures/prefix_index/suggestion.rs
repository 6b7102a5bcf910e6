//! Suggestion records returned by prefix lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed word together with its definition.
///
/// Word and definition travel as one record so that no reordering by a caller
/// can detach a definition from its word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The full word, starting with the queried prefix
    pub word: String,

    /// Definition stored for the word
    pub definition: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    pub fn new<W, D>(word: W, definition: D) -> Self
    where
        W: Into<String>,
        D: Into<String>,
    {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.definition)
    }
}
