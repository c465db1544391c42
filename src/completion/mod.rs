//! Per-command completion.
//!
//! A [`CompletionTable`] maps each command name to the [`PrefixTrie`] built
//! from that command's options. The table is built once at startup by the
//! [`CompletionLoader`] and then only read, so the session borrows it.

use std::collections::HashMap;

use crate::data_structures::prefix_trie::PrefixTrie;

mod loader;

pub use loader::CompletionLoader;

/// Owned map from command name to its option trie.
#[derive(Debug, Clone, Default)]
pub struct CompletionTable {
    tries: HashMap<String, PrefixTrie>,
}

impl CompletionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the trie for `command` from its candidates.
    ///
    /// Candidates for a command that is already known are merged into its
    /// existing trie.
    pub fn insert_command<C, I, S>(&mut self, command: C, candidates: I)
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tries
            .entry(command.into())
            .or_default()
            .extend(candidates);
    }

    /// Returns the trie for `command`, if one was loaded.
    pub fn get(&self, command: &str) -> Option<&PrefixTrie> {
        self.tries.get(command)
    }

    /// Iterates over the known command names.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.tries.keys().map(String::as_str)
    }

    /// Returns the options of `command` that start with `prefix`.
    ///
    /// An unknown command has no options, so the result is empty.
    pub fn suggest(&self, command: &str, prefix: &str) -> Vec<String> {
        match self.tries.get(command) {
            Some(trie) => trie.suggest(prefix),
            None => {
                tracing::debug!(command, "No completions loaded for command");
                Vec::new()
            }
        }
    }

    /// Completes the last token of an input line.
    pub fn complete(&self, line: &str) -> Vec<String> {
        let request = CompletionRequest::parse(line);
        self.suggest(request.command, request.prefix)
    }

    /// Number of commands in the table.
    pub fn len(&self) -> usize {
        self.tries.len()
    }

    /// Whether no command has completions.
    pub fn is_empty(&self) -> bool {
        self.tries.is_empty()
    }
}

impl<C, W> FromIterator<(C, Vec<W>)> for CompletionTable
where
    C: Into<String>,
    W: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (C, Vec<W>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (command, candidates) in iter {
            table.insert_command(command, candidates);
        }
        table
    }
}

/// The parts of an input line that completion looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRequest<'a> {
    /// First space-separated token
    pub command: &'a str,

    /// Last space-separated token; empty when the line ends with a space
    pub prefix: &'a str,
}

impl<'a> CompletionRequest<'a> {
    /// Splits `line` on single spaces.
    ///
    /// A line with a single token is both the command and the prefix.
    pub fn parse(line: &'a str) -> Self {
        let command = line.split(' ').next().unwrap_or_default();
        let prefix = line.rsplit(' ').next().unwrap_or_default();
        Self { command, prefix }
    }
}
