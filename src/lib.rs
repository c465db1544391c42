//! gosh library
//!
//! A toy interactive shell whose interesting part is option completion:
//! every command gets a prefix trie built from its option list, and pressing
//! Tab lists the options that start with the last word typed.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_trie`]: the completion engine, independent of
//!   everything else
//! - [`completion`]: one trie per command, loaded from a directory of option files
//! - [`shell`]: cursor, line editor, built-ins, command runner, terminal and session
//! - [`config`] and [`error`]: layered configuration and the error taxonomy

pub mod completion;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod shell;

// Crate-internal test suites
#[cfg(test)]
pub(crate) mod tests;
