//! Wordsuggest Library
//!
//! Interactive prefix autocomplete over a dictionary of words and their
//! definitions. The heart of the crate is [`data_structures::PrefixIndex`],
//! a trie supporting two operations: `insert` a word with its definition,
//! and `suggest` every stored word starting with a prefix.
//!
//! Around it sit the collaborators used by the `wordsuggest` binary:
//! - [`dictionary`] reads a JSON word/definition file into the index
//! - [`session`] turns keystrokes into fresh lookups and a top-N display
//! - [`terminal`] drives a session from a raw-mode terminal
//! - [`config`] layers defaults, a config file, and environment overrides

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod session;
pub mod terminal;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for wordsuggest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
