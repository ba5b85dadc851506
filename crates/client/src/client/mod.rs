//! Main client for the evaluation service and the advanced API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `credit`: Evaluation, policy and health methods
//! - `users`, `dates`, `files`, `system`, `reports`: Advanced API methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries. Each method issues exactly one request.

pub mod builder;

mod credit;
mod dates;
mod files;
mod reports;
mod system;
mod users;

use crate::metrics::MetricsCollector;

/// Client for the credit evaluation service and its advanced companion API.
///
/// Use [`PreevalClient::builder()`] to create one:
///
/// ```rust,ignore
/// use preeval_client::PreevalClient;
///
/// let client = PreevalClient::builder()
///     .api_url("http://localhost:8000".to_string())
///     .build()?;
/// let policy = client.get_policy().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PreevalClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_url: String,
    pub(crate) advanced_url: String,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl PreevalClient {
    /// Create a new client builder.
    pub fn builder() -> builder::PreevalClientBuilder {
        builder::PreevalClientBuilder::new()
    }

    /// Base URL of the evaluation service.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Base URL of the advanced API.
    pub fn advanced_url(&self) -> &str {
        &self.advanced_url
    }
}
