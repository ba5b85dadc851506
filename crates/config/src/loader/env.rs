//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `PREEVAL_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub const ENV_API_URL: &str = "PREEVAL_API_URL";
pub const ENV_ADVANCED_URL: &str = "PREEVAL_ADVANCED_URL";
pub const ENV_TIMEOUT: &str = "PREEVAL_TIMEOUT";
pub const ENV_INACTIVITY_MINUTES: &str = "PREEVAL_INACTIVITY_MINUTES";
pub const ENV_CONFIG_PATH: &str = "PREEVAL_CONFIG_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Values already set through explicit builder overrides are kept.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_API_URL)
        && loader.api_url().is_none()
    {
        loader.set_api_url(Some(url));
    }
    if let Some(url) = env_var_or_none(ENV_ADVANCED_URL)
        && loader.advanced_url().is_none()
    {
        loader.set_advanced_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT)
        && loader.timeout().is_none()
    {
        let secs: u64 = timeout
            .parse()
            .map_err(|_| ConfigError::invalid(ENV_TIMEOUT, "must be a number of seconds"))?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(minutes) = env_var_or_none(ENV_INACTIVITY_MINUTES)
        && loader.inactivity_minutes().is_none()
    {
        let value: u32 = minutes.parse().map_err(|_| {
            ConfigError::invalid(ENV_INACTIVITY_MINUTES, "must be a whole number of minutes")
        })?;
        loader.set_inactivity_minutes(Some(value));
    }
    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
        && loader.config_path().is_none()
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    Ok(())
}
