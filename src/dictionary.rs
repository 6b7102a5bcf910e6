//! Dictionary loading.
//!
//! A dictionary is a JSON object mapping each word to its definition:
//!
//! ```json
//! { "cat": "a feline", "car": "a vehicle" }
//! ```
//!
//! The file is parsed completely before anything touches the index, so a
//! malformed dictionary leaves the index exactly as it was.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::data_structures::PrefixIndex;
use crate::error::dictionary::DictionaryError;

/// Words mapped to definitions, in word order.
pub type Dictionary = BTreeMap<String, String>;

/// Parses a dictionary from JSON text.
pub fn parse_dictionary(json: &str) -> Result<Dictionary, DictionaryError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the dictionary file at `path`.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DictionaryError::FileNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = parse_dictionary(&contents)?;
    debug!(path = %path.display(), words = dictionary.len(), "dictionary parsed");
    Ok(dictionary)
}

/// Inserts every entry of `dictionary` into `index`.
///
/// # Returns
///
/// The number of words that were new to the index.
pub fn populate(index: &PrefixIndex, dictionary: Dictionary) -> usize {
    let total = dictionary.len();
    let added = index.insert_all(dictionary);
    info!(total, added, "dictionary loaded into index");
    added
}

/// Builds a fresh index from the dictionary file at `path`.
pub fn index_from_file<P: AsRef<Path>>(path: P) -> Result<PrefixIndex, DictionaryError> {
    let index = PrefixIndex::new();
    populate(&index, load_dictionary(path)?);
    Ok(index)
}
