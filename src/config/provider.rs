//! Provider configuration module.
//!
//! This module defines which serialization format is used by default and
//! how the built-in providers render their output.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Format used when none can be inferred (must be registered)
    pub default_format: String,

    /// Whether the JSON provider pretty-prints its output
    pub pretty_json: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
            pretty_json: false,
        }
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_format.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "default_format cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
