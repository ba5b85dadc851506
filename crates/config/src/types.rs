//! Configuration types.
//!
//! Responsibilities:
//! - Define the resolved `Config` handed to the client builder and the wizard.
//! - Provide defaults that mirror the backend's stock deployment.
//!
//! Does NOT handle:
//! - Reading values from the environment or disk (see `loader`).

use std::time::Duration;

use serde::Serialize;

use crate::constants::{
    DEFAULT_ADVANCED_PATH, DEFAULT_API_URL, DEFAULT_INACTIVITY_MINUTES, DEFAULT_TIMEOUT_SECS,
    INACTIVITY_TICK_MS,
};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Base URL of the evaluation service (no trailing slash).
    pub api_url: String,
    /// Base URL of the advanced file/user/report API (no trailing slash).
    pub advanced_url: String,
    /// HTTP request timeout.
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Inactivity timer settings.
    pub inactivity: InactivityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            advanced_url: format!("{DEFAULT_API_URL}{DEFAULT_ADVANCED_PATH}"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            inactivity: InactivityConfig::default(),
        }
    }
}

/// Settings for the inactivity countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InactivityConfig {
    /// Minutes without activity before the continue/abort prompt.
    pub timeout_minutes: u32,
    /// Length of one logical tick.
    #[serde(with = "duration_millis")]
    pub tick: Duration,
}

impl InactivityConfig {
    /// Create a config with the given timeout and the standard one-second tick.
    pub fn with_minutes(timeout_minutes: u32) -> Self {
        Self {
            timeout_minutes,
            ..Self::default()
        }
    }

    /// Full countdown length in ticks (seconds).
    pub fn total_seconds(&self) -> u32 {
        self.timeout_minutes.saturating_mul(60)
    }
}

impl Default for InactivityConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: DEFAULT_INACTIVITY_MINUTES,
            tick: Duration::from_millis(INACTIVITY_TICK_MS),
        }
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}
