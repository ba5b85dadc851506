//! System status methods for [`PreevalClient`].

use crate::client::PreevalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{LoadingStatus, SystemStatus};

impl PreevalClient {
    /// Run the service's load sequence and return its summary.
    pub async fn simulate_loading(&self) -> Result<LoadingStatus> {
        endpoints::simulate_loading(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }

    pub async fn system_status(&self) -> Result<SystemStatus> {
        endpoints::system_status(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }
}
