//! Report methods for [`PreevalClient`].

use crate::client::PreevalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{GeneratedReport, ReportRequest};

impl PreevalClient {
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<GeneratedReport> {
        endpoints::generate_report(&self.http, &self.advanced_url, request, self.metrics.as_ref())
            .await
    }

    /// Download a previously generated report as raw bytes.
    pub async fn download_report(&self, file_name: &str) -> Result<Vec<u8>> {
        endpoints::download_report(
            &self.http,
            &self.advanced_url,
            file_name,
            self.metrics.as_ref(),
        )
        .await
    }
}
