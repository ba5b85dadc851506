//! On-disk config file format.
//!
//! Responsibilities:
//! - Define the JSON config file shape (`ConfigFile`).
//! - Define config file errors (`ConfigFileError`).
//! - Read and write config files.
//!
//! Does NOT handle:
//! - Range checks on the values (done when the loader builds a `Config`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::Config;

/// Contents of `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactivity_minutes: Option<u32>,
}

impl From<&Config> for ConfigFile {
    /// Capture a resolved configuration so it can be written back to disk.
    fn from(config: &Config) -> Self {
        Self {
            api_url: Some(config.api_url.clone()),
            advanced_url: Some(config.advanced_url.clone()),
            timeout_seconds: Some(config.timeout.as_secs()),
            inactivity_minutes: Some(config.inactivity.timeout_minutes),
        }
    }
}

/// Errors that can occur when reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads and parses the config file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes the config file, creating parent directories as needed.
pub fn write_config_file(path: &Path, file: &ConfigFile) -> Result<(), ConfigFileError> {
    let write_err = |source| ConfigFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let content = serde_json::to_string_pretty(file).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, content).map_err(write_err)?;
    tracing::debug!(path = %path.display(), "Wrote config file");
    Ok(())
}
