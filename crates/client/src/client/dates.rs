//! System date methods for [`PreevalClient`].

use serde_json::Value;

use crate::client::PreevalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::DateConfig;

impl PreevalClient {
    /// Configure the system date (`day`/`month`/`year`).
    pub async fn configure_date(&self, day: u8, month: u8, year: u16) -> Result<Value> {
        endpoints::configure_date(
            &self.http,
            &self.advanced_url,
            day,
            month,
            year,
            self.metrics.as_ref(),
        )
        .await
    }

    pub async fn current_date(&self) -> Result<DateConfig> {
        endpoints::current_date(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }
}
