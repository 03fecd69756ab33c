use crate::core::FormatOptions;
use crate::utils::error::{JoinError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format options loaded from a TOML file. Every field is optional; unset fields
/// fall back to the `FormatOptions` defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatProfile {
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub postfix: Option<String>,
}

impl FormatProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(JoinError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| JoinError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Overlays the profile on top of `options`, keeping `options` values only for
    /// fields the profile leaves unset.
    pub fn apply(&self, mut options: FormatOptions) -> FormatOptions {
        if let Some(separator) = &self.separator {
            options.separator = separator.clone();
        }
        if let Some(prefix) = &self.prefix {
            options.prefix = prefix.clone();
        }
        if let Some(postfix) = &self.postfix {
            options.postfix = postfix.clone();
        }
        options
    }
}
