// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigFormat;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported config format {extension:?} for {path:?} (expected .json or .yaml)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Config file not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{format} parsing error in {path:?}: {message}")]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Failed to create directory {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Dotted name of the offending field, for `MissingField` / `InvalidField`.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::MissingField(field) | ConfigError::InvalidField { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
