//! Completion source loading.
//!
//! Each regular file in the completion directory describes one command: the
//! file name is the command name and the first CSV record lists its options.
//!
//! ```text
//! configs/
//! ├── ls      -l,-a,--all,--color
//! └── grep    -i,-v,--invert-match
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::CompletionTable;
use crate::error::completion::CompletionError;

/// Result type for completion loading.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Reads a directory of option-list files into a [`CompletionTable`].
#[derive(Debug, Clone)]
pub struct CompletionLoader {
    directory: PathBuf,
}

impl CompletionLoader {
    /// Creates a loader for `directory`.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The directory this loader reads.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Loads every completion file in the directory.
    ///
    /// Hidden files and subdirectories are skipped. Any unreadable or
    /// malformed file fails the whole load.
    pub fn load(&self) -> CompletionResult<CompletionTable> {
        if !self.directory.is_dir() {
            return Err(CompletionError::DirectoryNotFound(self.directory.clone()));
        }

        let entries = fs::read_dir(&self.directory).map_err(|source| CompletionError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let mut table = CompletionTable::new();
        for entry in entries {
            let entry = entry.map_err(|source| CompletionError::Io {
                path: self.directory.clone(),
                source,
            })?;
            let path = entry.path();

            let Some(command) = path.file_name().and_then(|name| name.to_str()) else {
                warn!(path = %path.display(), "Skipping completion file with non UTF-8 name");
                continue;
            };
            if command.starts_with('.') || !path.is_file() {
                debug!(path = %path.display(), "Skipping completion entry");
                continue;
            }

            let candidates = read_candidates(&path)?;
            debug!(command, candidates = candidates.len(), "Loaded completion source");
            table.insert_command(command, candidates);
        }

        info!(
            directory = %self.directory.display(),
            commands = table.len(),
            "Completion sources loaded"
        );
        Ok(table)
    }
}

/// Reads the first CSV record of `path` as a list of candidates.
///
/// Fields are trimmed and empty fields dropped. An empty file has no
/// candidates.
pub fn read_candidates(path: &Path) -> CompletionResult<Vec<String>> {
    let file = fs::File::open(path).map_err(|source| CompletionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_candidates(file).map_err(|source| CompletionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_candidates<R: std::io::Read>(reader: R) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut record = csv::StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(Vec::new());
    }

    Ok(record
        .iter()
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect())
}
