//! System endpoints of the advanced API.

use reqwest::Client;

use crate::endpoints::request::{get_data, post_data};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{LoadingStatus, SystemStatus};

/// Ask the service to prepare the system and report its startup summary.
pub async fn simulate_loading(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<LoadingStatus> {
    post_data::<(), _>(client, base_url, "/system/loading", None, metrics).await
}

pub async fn system_status(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<SystemStatus> {
    get_data(client, base_url, "/system/status", metrics).await
}
