//! Completion configuration module.
//!
//! Where the per-command option lists live and how suggestions are presented.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Completion source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionConfig {
    /// Directory holding one option-list file per command
    pub directory: PathBuf,

    /// Whether to sort suggestions before displaying them
    pub sort_suggestions: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./configs"),
            sort_suggestions: false,
        }
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "completion directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
