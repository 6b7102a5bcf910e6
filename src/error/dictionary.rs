//! Dictionary error module.
//!
//! Errors raised while reading a word/definition dictionary from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file does not exist.
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),

    /// The dictionary file exists but could not be read.
    #[error("Failed to read dictionary {path}: {source}")]
    Read {
        /// Path of the dictionary file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The dictionary contents are not a JSON object of strings.
    #[error("Malformed dictionary: {0}")]
    Malformed(#[from] serde_json::Error),
}
