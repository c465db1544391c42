// Copyright (c) 2025 Gosh Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie Implementation
//!
//! This module provides the completion engine behind the shell: a trie keyed
//! by `char`, built once from a command's option list and then queried for
//! every option that starts with what the user has typed so far.
//!
//! # Example
//!
//! ```
//! use gosh_lib::data_structures::prefix_trie::PrefixTrie;
//!
//! let trie = PrefixTrie::build(["-l", "-list", "-lat", "-a"]);
//!
//! let mut words = trie.suggest("-l");
//! words.sort();
//! assert_eq!(words, vec!["-l", "-lat", "-list"]);
//!
//! assert!(trie.suggest("-x").is_empty());
//! ```
//!
//! # Semantics
//!
//! * Matching is exact on code points; there is no case folding or ranking.
//! * Results are an unordered set. Callers that display them sort first.
//! * The empty prefix matches every inserted word.
//! * Inserting the empty word is a no-op.
//!
//! # Complexity
//!
//! * `insert`: O(length of the word)
//! * `suggest`: O(length of the prefix + size of the matching subtree)

mod node;

#[cfg(test)]
mod tests;

use std::fmt::Write as _;

pub use node::TrieNode;

/// Indentation used by [`PrefixTrie::debug_print`] for each tree level.
const DEBUG_INDENT: &str = "  ";

/// Label printed for the root node in debug dumps.
const DEBUG_ROOT_LABEL: char = '^';

/// A prefix tree over option strings.
///
/// The trie is mutated only while it is being built. After that it is
/// shared by reference, and since it holds nothing but owned data it is
/// `Send + Sync`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words stored
    word_count: usize,
}

impl PrefixTrie {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from a list of completion candidates.
    ///
    /// # Arguments
    ///
    /// * `candidates` - The words to insert, in any order.
    pub fn build<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(candidates);
        trie
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before. Inserting an existing word
    /// or the empty word leaves the trie unchanged and returns `false`.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;
        if is_new {
            self.word_count += 1;
        }
        is_new
    }

    /// Returns every inserted word that starts with `prefix`.
    ///
    /// The prefix itself is included when it was inserted as a word. An
    /// unknown prefix yields an empty vector. Order is unspecified.
    pub fn suggest<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.suggestions(prefix).collect()
    }

    /// Lazily yields every inserted word that starts with `prefix`.
    ///
    /// This is the depth-first traversal behind [`PrefixTrie::suggest`].
    pub fn suggestions<P>(&self, prefix: P) -> Suggestions<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.find_node(prefix) {
            Some(node) => Suggestions {
                root: &self.root,
                stack: vec![(node, prefix.to_string())],
            },
            None => Suggestions {
                root: &self.root,
                stack: Vec::new(),
            },
        }
    }

    /// Checks whether `word` was inserted as a complete word.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        !word.is_empty() && self.find_node(word).is_some_and(|node| node.is_end_of_word)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Renders the subtree as indented text, one node per line.
    ///
    /// Each line is the node's character followed by `1` when a word ends
    /// there and `0` otherwise. `level` sets the indentation of the root
    /// line; children are indented one step further. Siblings are sorted so
    /// the dump is stable.
    pub fn debug_print(&self, level: usize) -> String {
        let mut out = String::new();
        Self::write_node(&self.root, DEBUG_ROOT_LABEL, level, &mut out);
        out
    }

    fn write_node(node: &TrieNode, label: char, level: usize, out: &mut String) {
        let marker = if node.is_end_of_word { 1 } else { 0 };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}{} {}", DEBUG_INDENT.repeat(level), label, marker);

        let mut children: Vec<_> = node.children.iter().collect();
        children.sort_by_key(|(c, _)| **c);
        for (_, child) in children {
            Self::write_node(child, child.character, level + 1, out);
        }
    }

    /// Walks `prefix` from the root, returning the node it ends on.
    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

impl<S> Extend<S> for PrefixTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for PrefixTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}

/// Depth-first iterator over the words below a prefix node.
///
/// Created by [`PrefixTrie::suggestions`]. Uses an explicit stack, so deep
/// option lists cannot overflow the call stack.
#[derive(Debug)]
pub struct Suggestions<'a> {
    /// Root of the owning trie; never emitted
    root: &'a TrieNode,

    /// Pending nodes with the word spelled by the path to them
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Iterator for Suggestions<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, word)) = self.stack.pop() {
            for (c, child) in &node.children {
                let mut extended = String::with_capacity(word.len() + c.len_utf8());
                extended.push_str(&word);
                extended.push(*c);
                self.stack.push((&**child, extended));
            }

            if !std::ptr::eq(node, self.root) && node.completes_word() {
                return Some(word);
            }
        }
        None
    }
}
