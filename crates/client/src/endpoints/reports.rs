//! Report generation and download endpoints of the advanced API.

use reqwest::Client;

use crate::endpoints::request::post_data;
use crate::endpoints::send_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::validation::require_non_empty;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{GeneratedReport, ReportRequest};

/// Generate a Markdown report of the system state.
pub async fn generate_report(
    client: &Client,
    base_url: &str,
    request: &ReportRequest,
    metrics: Option<&MetricsCollector>,
) -> Result<GeneratedReport> {
    post_data(client, base_url, "/reports/generate", Some(request), metrics).await
}

/// Download a generated report as raw bytes.
pub async fn download_report(
    client: &Client,
    base_url: &str,
    file_name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    require_non_empty("report file name", file_name)?;
    let url = format!(
        "{base_url}/reports/download/{}",
        encode_path_segment(file_name)
    );
    let response = send_request(
        client.get(&url),
        "/reports/download/{filename}",
        "GET",
        metrics,
    )
    .await?;
    Ok(response.bytes().await?.to_vec())
}
