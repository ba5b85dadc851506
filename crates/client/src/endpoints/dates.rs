//! System date endpoints of the advanced API.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::request::{get_data, post_data};
use crate::endpoints::validation::check_date;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{DateConfig, DateConfigRequest};

/// Set the system date used to stamp file creation and modification.
pub async fn configure_date(
    client: &Client,
    base_url: &str,
    day: u8,
    month: u8,
    year: u16,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    check_date(day, month, year)?;
    let body = DateConfigRequest { day, month, year };
    post_data(client, base_url, "/date/configure", Some(&body), metrics).await
}

pub async fn current_date(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<DateConfig> {
    get_data(client, base_url, "/date/current", metrics).await
}
