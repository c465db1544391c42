//! Data structures for gosh.
//!
//! The completion engine lives here. It has no dependency on the shell, the
//! terminal or configuration, and it never fails.

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{PrefixTrie, Suggestions};
