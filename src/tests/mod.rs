//! Test modules for wordsuggest.
//!
//! Cross-module tests that need files on disk or touch the environment:
//! configuration layering, dictionary loading, and error reporting.
//! Tests of a single module live next to that module.

pub mod test_utils;

pub use test_utils::TestFixture;
