//! File management endpoints of the advanced API.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::request::{get_data, post_data};
use crate::endpoints::validation::require_non_empty;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{FileContent, FileCreateRequest, FileListing, FileReadRequest, FileWriteRequest};

pub async fn list_files(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<FileListing> {
    get_data(client, base_url, "/files/list", metrics).await
}

/// Read one file. A missing file surfaces as a 404 `ApiError`.
pub async fn read_file(
    client: &Client,
    base_url: &str,
    file_name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<FileContent> {
    require_non_empty("file name", file_name)?;
    let body = FileReadRequest {
        file_name: file_name.to_string(),
    };
    post_data(client, base_url, "/files/read", Some(&body), metrics).await
}

/// Overwrite an existing, writable file.
pub async fn write_file(
    client: &Client,
    base_url: &str,
    request: &FileWriteRequest,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    require_non_empty("file name", &request.file_name)?;
    require_non_empty("author", &request.author)?;
    post_data(client, base_url, "/files/write", Some(request), metrics).await
}

/// Create a new file.
pub async fn create_file(
    client: &Client,
    base_url: &str,
    request: &FileCreateRequest,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    require_non_empty("file name", &request.file_name)?;
    require_non_empty("author", &request.author)?;
    post_data(client, base_url, "/files/create", Some(request), metrics).await
}

pub async fn file_stats(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    get_data(client, base_url, "/files/stats", metrics).await
}
