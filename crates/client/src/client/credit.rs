//! Evaluation service methods for [`PreevalClient`].

use crate::client::PreevalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreditApplication, EvaluationResult, HealthStatus, PolicyInfo};

impl PreevalClient {
    /// Submit an application and return the service's decision.
    pub async fn evaluate(&self, application: &CreditApplication) -> Result<EvaluationResult> {
        endpoints::evaluate(&self.http, &self.api_url, application, self.metrics.as_ref()).await
    }

    /// Get the published credit policy.
    pub async fn get_policy(&self) -> Result<PolicyInfo> {
        endpoints::get_policy(&self.http, &self.api_url, self.metrics.as_ref()).await
    }

    /// Get the service health status.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        endpoints::check_health(&self.http, &self.api_url, self.metrics.as_ref()).await
    }
}
