//! Client builder for constructing [`PreevalClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the service URLs
//! - Normalizing base URLs (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout)
//!
//! # Invariants
//! - `api_url` is required; `advanced_url` defaults to `{api_url}/advanced`
//! - Both URLs are stored without trailing slashes

use std::time::Duration;

use preeval_config::Config;
use preeval_config::constants::{DEFAULT_ADVANCED_PATH, DEFAULT_TIMEOUT_SECS};
use url::Url;

use crate::client::PreevalClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`PreevalClient`].
pub struct PreevalClientBuilder {
    api_url: Option<String>,
    advanced_url: Option<String>,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for PreevalClientBuilder {
    fn default() -> Self {
        Self {
            api_url: None,
            advanced_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl PreevalClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation service base URL, e.g. `http://localhost:8000`.
    pub fn api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the advanced API base URL. Defaults to `{api_url}/advanced`.
    pub fn advanced_url(mut self, url: String) -> Self {
        self.advanced_url = Some(url);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector used to record request metrics.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_url = Some(config.api_url.clone());
        self.advanced_url = Some(config.advanced_url.clone());
        self.timeout = config.timeout;
        self
    }

    /// Strip trailing slashes so endpoint paths concatenate cleanly.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn validate_url(field: &str, raw: &str) -> Result<()> {
        let parsed =
            Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{field} '{raw}': {e}")))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidUrl(format!(
                "{field} '{raw}': unsupported scheme '{scheme}'"
            ))),
        }
    }

    /// Build the [`PreevalClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `api_url` is missing or either URL
    /// is not an absolute http(s) URL. Returns `ClientError::HttpError` if the
    /// HTTP client fails to build.
    pub fn build(self) -> Result<PreevalClient> {
        let api_url = self
            .api_url
            .ok_or_else(|| ClientError::InvalidUrl("api_url is required".to_string()))?;
        let api_url = Self::normalize_base_url(api_url);
        Self::validate_url("api_url", &api_url)?;

        let advanced_url = match self.advanced_url {
            Some(url) => Self::normalize_base_url(url),
            None => format!("{api_url}{DEFAULT_ADVANCED_PATH}"),
        };
        Self::validate_url("advanced_url", &advanced_url)?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(PreevalClient {
            http,
            api_url,
            advanced_url,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_copies_urls_and_timeout() {
        let config = Config {
            api_url: "http://eval.internal:9000".to_string(),
            advanced_url: "http://files.internal:9100/adv".to_string(),
            timeout: Duration::from_secs(5),
            ..Config::default()
        };

        let builder = PreevalClient::builder().from_config(&config);
        assert_eq!(builder.timeout, Duration::from_secs(5));

        let client = builder.build().unwrap();
        assert_eq!(client.api_url(), "http://eval.internal:9000");
        assert_eq!(client.advanced_url(), "http://files.internal:9100/adv");
    }

    #[test]
    fn test_advanced_url_defaults_under_api_url() {
        let client = PreevalClient::builder()
            .api_url("http://localhost:8000/".to_string())
            .build()
            .unwrap();
        assert_eq!(client.api_url(), "http://localhost:8000");
        assert_eq!(client.advanced_url(), "http://localhost:8000/advanced");
    }

    #[test]
    fn test_missing_api_url_is_rejected() {
        let err = PreevalClient::builder().build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let err = PreevalClient::builder()
            .api_url("ftp://localhost".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(msg) if msg.contains("ftp")));
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        assert_eq!(
            PreevalClientBuilder::normalize_base_url("http://example.com:8000//".to_string()),
            "http://example.com:8000"
        );
    }
}
