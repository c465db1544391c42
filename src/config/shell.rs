//! Shell configuration module.
//!
//! Settings for the interactive session: what the prompt looks like and how
//! suggestions are laid out on the row under the command line.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Interactive shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    /// Prompt printed at the start of every command line
    pub prompt: String,

    /// Text printed after each suggestion
    pub suggestion_separator: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "??".to_string(),
            suggestion_separator: " ".to_string(),
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.is_empty() {
            return Err(ConfigError::ValidationError(
                "prompt cannot be empty".to_string(),
            ));
        }

        if self.prompt.contains('\n') {
            return Err(ConfigError::ValidationError(
                "prompt must fit on a single line".to_string(),
            ));
        }

        if self.suggestion_separator.is_empty() || self.suggestion_separator.contains('\n') {
            return Err(ConfigError::ValidationError(
                "suggestion_separator must be non-empty and fit on a single line".to_string(),
            ));
        }

        Ok(())
    }
}
