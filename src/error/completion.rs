//! Completion source error module.
//!
//! Errors raised while reading per-command option lists from disk. Every
//! variant carries the path involved so the message points at the file to fix.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading completion sources.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The completion directory does not exist or is not a directory.
    #[error("Completion directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// A file or directory could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A completion file is not valid CSV.
    #[error("Failed to parse completion file {path}: {source}")]
    Parse {
        /// The offending file
        path: PathBuf,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },
}
