//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, the config file, and direct builder methods.
//! - Validate and normalize values when building the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file reading (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, which take
//!   precedence over config file values. Each source only fills unset fields.
//! - URLs are normalized to have no trailing slash.
//! - When no advanced URL is given it is derived from the API URL.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::env::{ENV_ADVANCED_URL, ENV_API_URL, ENV_INACTIVITY_MINUTES, ENV_TIMEOUT, apply_env};
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_ADVANCED_PATH, DEFAULT_API_URL, DEFAULT_INACTIVITY_MINUTES, DEFAULT_TIMEOUT_SECS,
    MAX_INACTIVITY_MINUTES, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, InactivityConfig};

/// Configuration loader that builds config from overrides, environment variables and the config file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    api_url: Option<String>,
    advanced_url: Option<String>,
    timeout: Option<Duration>,
    inactivity_minutes: Option<u32>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("1") | Some("true")
        )
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `PREEVAL_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read configuration from the config file.
    ///
    /// Uses the explicit config path when one is set, the platform default otherwise.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Set the evaluation service base URL.
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the advanced API base URL.
    pub fn with_advanced_url(mut self, url: String) -> Self {
        self.advanced_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the inactivity timeout in minutes.
    pub fn with_inactivity_minutes(mut self, minutes: u32) -> Self {
        self.inactivity_minutes = Some(minutes);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn advanced_url(&self) -> Option<&str> {
        self.advanced_url.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn inactivity_minutes(&self) -> Option<u32> {
        self.inactivity_minutes
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub(crate) fn set_api_url(&mut self, url: Option<String>) {
        self.api_url = url;
    }

    pub(crate) fn set_advanced_url(&mut self, url: Option<String>) {
        self.advanced_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_inactivity_minutes(&mut self, minutes: Option<u32>) {
        self.inactivity_minutes = minutes;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    /// Build the final configuration, validating every value.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_url = normalize_url(
            ENV_API_URL,
            self.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
        )?;
        let advanced_url = match self.advanced_url.as_deref() {
            Some(url) => normalize_url(ENV_ADVANCED_URL, url)?,
            None => format!("{api_url}{DEFAULT_ADVANCED_PATH}"),
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                ENV_TIMEOUT,
                format!("must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
            ));
        }

        let minutes = self
            .inactivity_minutes
            .unwrap_or(DEFAULT_INACTIVITY_MINUTES);
        if minutes == 0 || minutes > MAX_INACTIVITY_MINUTES {
            return Err(ConfigError::invalid(
                ENV_INACTIVITY_MINUTES,
                format!("must be between 1 and {MAX_INACTIVITY_MINUTES} minutes"),
            ));
        }

        Ok(Config {
            api_url,
            advanced_url,
            timeout,
            inactivity: InactivityConfig::with_minutes(minutes),
        })
    }
}

/// Validate an http(s) URL and strip trailing slashes.
fn normalize_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::invalid(var, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::invalid(
                var,
                format!("unsupported scheme '{other}', expected http or https"),
            ));
        }
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::invalid(var, "URL has no host"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
