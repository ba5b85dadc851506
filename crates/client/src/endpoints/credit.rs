//! Evaluation service endpoints.

use reqwest::Client;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{CreditApplication, EvaluationResult, HealthStatus, PolicyInfo};

pub const EVALUATE_PATH: &str = "/api/v1/evaluate";
pub const POLICY_PATH: &str = "/api/v1/policy";
pub const HEALTH_PATH: &str = "/api/v1/health";

/// Submit a fully populated application for evaluation.
pub async fn evaluate(
    client: &Client,
    base_url: &str,
    application: &CreditApplication,
    metrics: Option<&MetricsCollector>,
) -> Result<EvaluationResult> {
    let url = format!("{base_url}{EVALUATE_PATH}");
    let builder = client.post(&url).json(application);
    let response = send_request(builder, EVALUATE_PATH, "POST", metrics).await?;
    let result: EvaluationResult = read_json(response, EVALUATE_PATH).await?;

    if let Some(m) = metrics {
        m.record_decision(result.decision.as_str());
    }
    Ok(result)
}

/// Fetch the published credit policy limits.
pub async fn get_policy(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<PolicyInfo> {
    let url = format!("{base_url}{POLICY_PATH}");
    let response = send_request(client.get(&url), POLICY_PATH, "GET", metrics).await?;
    read_json(response, POLICY_PATH).await
}

/// Probe the service health endpoint.
pub async fn check_health(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<HealthStatus> {
    let url = format!("{base_url}{HEALTH_PATH}");
    let response = send_request(client.get(&url), HEALTH_PATH, "GET", metrics).await?;
    read_json(response, HEALTH_PATH).await
}
