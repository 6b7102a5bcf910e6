//! Data structures for wordsuggest.
//!
//! This module contains the prefix index that backs every completion lookup.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{PrefixIndex, PrefixNode, Suggestion};
