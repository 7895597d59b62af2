//! Display configuration
//!
//! Loaded from JSON (every field optional) or built with `with_*` setters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// How operands are rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Inserted between groups of three integer digits; empty disables grouping
    pub thousands_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: ",".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thousands separator
    #[must_use]
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    /// Disable digit grouping
    #[must_use]
    pub fn without_grouping(mut self) -> Self {
        self.thousands_separator.clear();
        self
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::Config(e.to_string()))
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::Config(e.to_string()))
    }
}
