// Copyright (c) 2025 Wordsuggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix index.

use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::data_structures::prefix_index::{PrefixIndex, Suggestion};

// Small alphabet so generated words share prefixes often
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcé]{0,6}").unwrap()
}

fn entries_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((word_strategy(), "[a-z ]{0,12}"), 0..40)
}

fn build(entries: &[(String, String)]) -> PrefixIndex {
    let index = PrefixIndex::new();
    for (word, definition) in entries {
        index.insert(word, definition.clone());
    }
    index
}

// Last write wins, matching the index's overwrite rule
fn model(entries: &[(String, String)]) -> BTreeMap<String, String> {
    entries.iter().cloned().collect()
}

proptest! {
    // Property: every inserted word is suggested for itself with its latest definition
    #[test]
    fn prop_inserted_word_is_suggested(entries in entries_strategy()) {
        let index = build(&entries);
        for (word, definition) in model(&entries) {
            let suggestion = Suggestion::new(word.clone(), definition);
            prop_assert!(index.suggest(&word).contains(&suggestion));
        }
    }

    // Property: the empty prefix returns the whole dictionary, once per word, sorted
    #[test]
    fn prop_empty_prefix_returns_everything(entries in entries_strategy()) {
        let index = build(&entries);
        let expected: Vec<Suggestion> = model(&entries)
            .into_iter()
            .map(|(word, definition)| Suggestion::new(word, definition))
            .collect();
        prop_assert_eq!(index.suggest(""), expected);
        prop_assert_eq!(index.len(), model(&entries).len());
    }

    // Property: suggestions are exactly the model's words starting with the prefix
    #[test]
    fn prop_suggest_matches_model(entries in entries_strategy(), prefix in word_strategy()) {
        let index = build(&entries);
        let expected: Vec<Suggestion> = model(&entries)
            .into_iter()
            .filter(|(word, _)| word.starts_with(&prefix))
            .map(|(word, definition)| Suggestion::new(word, definition))
            .collect();

        let results = index.suggest(&prefix);
        for suggestion in &results {
            prop_assert!(suggestion.word.starts_with(&prefix));
        }
        prop_assert_eq!(results, expected);
    }

    // Property: repeated lookups without inserts agree
    #[test]
    fn prop_suggest_is_idempotent(entries in entries_strategy(), prefix in word_strategy()) {
        let index = build(&entries);
        prop_assert_eq!(index.suggest(&prefix), index.suggest(&prefix));
    }
}
