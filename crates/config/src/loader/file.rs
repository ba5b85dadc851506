//! Config file application for the loader.
//!
//! Responsibilities:
//! - Resolve which config file to read (explicit path or platform default).
//! - Fill loader fields that are still unset from the file contents.
//!
//! Invariants:
//! - A missing default config file is silently skipped.
//! - A missing explicitly requested config file is an error.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{ConfigFile, default_config_path, read_config_file};

/// Read the config file (if any) and apply its values to unset loader fields.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.to_path_buf(), true),
        None => (
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
            false,
        ),
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileMissing { path });
        }
        tracing::debug!(path = %path.display(), "No config file found, using defaults");
        return Ok(());
    }

    let file = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    merge_file(loader, file);
    Ok(())
}

fn merge_file(loader: &mut ConfigLoader, file: ConfigFile) {
    if loader.api_url().is_none() {
        loader.set_api_url(file.api_url);
    }
    if loader.advanced_url().is_none() {
        loader.set_advanced_url(file.advanced_url);
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout_seconds.map(Duration::from_secs));
    }
    if loader.inactivity_minutes().is_none() {
        loader.set_inactivity_minutes(file.inactivity_minutes);
    }
}
