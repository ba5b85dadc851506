//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Provide conversion from lower-level errors (e.g., ConfigFileError).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Config file not found at {path}")]
    ConfigFileMissing { path: PathBuf },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}: {message}")]
    ConfigFileParse { path: PathBuf, message: String },

    /// The `.env` file exists but contains a malformed line. Only the line
    /// index is reported so secret values never reach logs.
    #[error("Failed to parse .env file at line {error_index} (set DOTENV_DISABLED=1 to skip it)")]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind:?}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn invalid(var: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            var: var.to_string(),
            message: message.into(),
        }
    }
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, .. } | ConfigFileError::Write { path, .. } => {
                ConfigError::ConfigFileRead { path }
            }
            ConfigFileError::Parse { path, source } => ConfigError::ConfigFileParse {
                path,
                message: source.to_string(),
            },
        }
    }
}
