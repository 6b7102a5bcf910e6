// Copyright (c) 2025 Wordsuggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Index Implementation
//!
//! A trie mapping words to definitions with completion lookups by prefix.
//!
//! # Example
//!
//! ```
//! use wordsuggest_lib::data_structures::prefix_index::{PrefixIndex, Suggestion};
//!
//! let index = PrefixIndex::new();
//! index.insert("cat", "a feline");
//! index.insert("car", "a vehicle");
//! index.insert("dog", "a canine");
//!
//! assert_eq!(
//!     index.suggest("ca"),
//!     vec![
//!         Suggestion::new("car", "a vehicle"),
//!         Suggestion::new("cat", "a feline"),
//!     ]
//! );
//! assert!(index.suggest("z").is_empty());
//! ```
//!
//! # Concurrency
//!
//! The whole trie sits behind a single mutex held for the full duration of
//! every operation, so inserts and lookups are serialized against each other
//! and a lookup never observes a half-built path.

mod node;
mod suggestion;

#[cfg(test)]
mod tests;

use parking_lot::Mutex;
use tracing::trace;

pub use node::PrefixNode;
pub use suggestion::Suggestion;

/// State guarded by the index lock.
#[derive(Debug, Default)]
struct Inner {
    /// Node for the empty prefix
    root: PrefixNode,

    /// Number of distinct words stored
    len: usize,
}

/// Thread-safe prefix index over word/definition pairs.
///
/// Key features:
/// * Completion of any prefix, including the empty one
/// * Results in ascending word order, paired with their definitions
/// * Iterative traversal, so very long words cannot exhaust the call stack
#[derive(Debug, Default)]
pub struct PrefixIndex {
    inner: Mutex<Inner>,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word with its definition.
    ///
    /// Missing nodes along the word's path are created. An existing
    /// definition for the same word is overwritten. The empty word is
    /// accepted and terminates the root.
    ///
    /// # Returns
    ///
    /// `true` if the word was new, `false` if its definition was replaced.
    pub fn insert<D>(&self, word: &str, definition: D) -> bool
    where
        D: Into<String>,
    {
        let definition = definition.into();
        let mut inner = self.inner.lock();

        let mut node = &mut inner.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = node.terminate(definition).is_none();
        if is_new {
            inner.len += 1;
        }

        trace!(word, is_new, "inserted word");
        is_new
    }

    /// Inserts every pair from `entries`.
    ///
    /// # Returns
    ///
    /// The number of words that were new to the index.
    pub fn insert_all<I, W, D>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (W, D)>,
        W: AsRef<str>,
        D: Into<String>,
    {
        let mut added = 0;
        for (word, definition) in entries {
            if self.insert(word.as_ref(), definition) {
                added += 1;
            }
        }
        added
    }

    /// Returns every stored word starting with `prefix`, with its definition.
    ///
    /// A word equal to `prefix` is included. The empty prefix yields the whole
    /// dictionary. A prefix matching no path yields an empty vector.
    ///
    /// Results are sorted by word.
    pub fn suggest(&self, prefix: &str) -> Vec<Suggestion> {
        let inner = self.inner.lock();

        let mut node = &inner.root;
        for c in prefix.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => {
                    trace!(prefix, "no path for prefix");
                    return Vec::new();
                }
            }
        }

        let mut suggestions = Vec::new();
        let mut pending = vec![(node, prefix.to_string())];

        // Children are pushed in reverse so the smallest character is popped
        // first; together with emitting a node before its subtree this yields
        // lexicographic order.
        while let Some((node, word)) = pending.pop() {
            for (c, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(word.len() + c.len_utf8());
                next.push_str(&word);
                next.push(*c);
                pending.push((child, next));
            }

            if let Some(definition) = &node.definition {
                suggestions.push(Suggestion {
                    word,
                    definition: definition.clone(),
                });
            }
        }

        trace!(prefix, count = suggestions.len(), "collected suggestions");
        suggestions
    }

    /// Returns the definition stored for exactly `word`.
    pub fn get(&self, word: &str) -> Option<String> {
        let inner = self.inner.lock();

        let mut node = &inner.root;
        for c in word.chars() {
            node = node.child(c)?;
        }
        node.definition.clone()
    }

    /// Returns the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.inner.lock().len
    }

    /// Checks whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<W, D> Extend<(W, D)> for PrefixIndex
where
    W: AsRef<str>,
    D: Into<String>,
{
    fn extend<I: IntoIterator<Item = (W, D)>>(&mut self, entries: I) {
        self.insert_all(entries);
    }
}

impl<W, D> FromIterator<(W, D)> for PrefixIndex
where
    W: AsRef<str>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, D)>>(entries: I) -> Self {
        let index = Self::new();
        index.insert_all(entries);
        index
    }
}
