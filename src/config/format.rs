// src/config/format.rs

use std::fmt;
use std::path::Path;

use crate::errors::{ConfigError, Result};

/// Serialization formats a config file may use, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from the file extension.
    ///
    /// Only `.json` and `.yaml` are recognised, compared case-sensitively.
    /// Anything else (including `.yml` and no extension) is an
    /// [`ConfigError::UnsupportedFormat`].
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") => Ok(ConfigFormat::Yaml),
            other => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.map(|ext| format!(".{ext}")).unwrap_or_default(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => f.write_str("JSON"),
            ConfigFormat::Yaml => f.write_str("YAML"),
        }
    }
}
