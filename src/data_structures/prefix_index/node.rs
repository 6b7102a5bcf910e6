// Copyright (c) 2025 Wordsuggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix index.
//!
//! Each node owns its children outright; the index is a strict tree and
//! nodes are only dropped together with the index. Teardown walks the tree
//! with an explicit stack, so dropping a very deep path does not recurse.

use std::collections::BTreeMap;

/// A single node of the prefix index.
///
/// The path of characters from the root to a node spells a prefix. A terminal
/// node additionally ends a complete word and carries that word's definition.
#[derive(Debug, Default)]
pub struct PrefixNode {
    /// Child nodes keyed by the next character, kept in code point order
    pub children: BTreeMap<char, PrefixNode>,

    /// Definition of the word ending at this node, `None` if not terminal
    pub definition: Option<String>,
}

impl PrefixNode {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some inserted word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.definition.is_some()
    }

    /// Returns the child for `c`, creating it if absent.
    pub fn child_or_insert(&mut self, c: char) -> &mut PrefixNode {
        self.children.entry(c).or_default()
    }

    /// Returns the child for `c`, if any.
    pub fn child(&self, c: char) -> Option<&PrefixNode> {
        self.children.get(&c)
    }

    /// Marks this node terminal with `definition`.
    ///
    /// Returns the previous definition if the node was already terminal.
    pub fn terminate(&mut self, definition: String) -> Option<String> {
        self.definition.replace(definition)
    }
}

impl Drop for PrefixNode {
    fn drop(&mut self) {
        let mut pending: Vec<PrefixNode> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            // `node` is dropped with an empty child map at the end of each iteration
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = PrefixNode::new();
        assert!(node.children.is_empty());
        assert!(!node.is_terminal());
    }

    #[test]
    fn test_terminate_replaces_definition() {
        let mut node = PrefixNode::new();
        assert_eq!(node.terminate("first".to_string()), None);
        assert!(node.is_terminal());
        assert_eq!(
            node.terminate("second".to_string()),
            Some("first".to_string())
        );
        assert_eq!(node.definition.as_deref(), Some("second"));
    }

    #[test]
    fn test_children_iterate_in_order() {
        let mut node = PrefixNode::new();
        for c in ['z', 'a', 'é', 'm'] {
            node.child_or_insert(c);
        }
        let keys: Vec<char> = node.children.keys().copied().collect();
        assert_eq!(keys, vec!['a', 'm', 'z', 'é']);
        assert!(node.child('m').is_some());
        assert!(node.child('q').is_none());
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut root = PrefixNode::new();
        let mut node = &mut root;
        for _ in 0..200_000 {
            node = node.child_or_insert('x');
        }
        node.terminate("leaf".to_string());

        drop(root);
    }

    #[test]
    fn test_drop_wide_and_deep_tree() {
        let mut root = PrefixNode::new();
        for c in 'a'..='z' {
            let mut node = root.child_or_insert(c);
            for _ in 0..10_000 {
                node = node.child_or_insert(c);
            }
        }
        assert_eq!(root.children.len(), 26);

        drop(root);
    }
}
