// Copyright (c) 2025 Gosh Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix trie.
//!
//! Every node owns its children outright, so a walk that takes `&mut` to a
//! child always mutates the node that lives in the tree.

use fnv::FnvHashMap;

/// Character held by the root node. The root never represents a word.
const ROOT_CHAR: char = '\0';

/// A node in the prefix trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// The character this node represents
    pub character: char,

    /// Whether an inserted word terminates at this node
    pub is_end_of_word: bool,

    /// Map of characters to exclusively owned child nodes
    pub children: FnvHashMap<char, Box<TrieNode>>,
}

impl TrieNode {
    /// Creates a node for `character` with no children.
    pub fn new(character: char) -> Self {
        Self {
            character,
            is_end_of_word: false,
            children: FnvHashMap::default(),
        }
    }

    /// Creates the sentinel root node.
    pub fn root() -> Self {
        Self::new(ROOT_CHAR)
    }

    /// Returns the child for `c`, creating it when absent.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children
            .entry(c)
            .or_insert_with(|| Box::new(TrieNode::new(c)))
    }

    /// Returns the child for `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(Box::as_ref)
    }

    /// A childless node can only exist because a word ended on it.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether traversal should emit this node as a completed word.
    pub fn completes_word(&self) -> bool {
        self.is_end_of_word || self.is_leaf()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}
