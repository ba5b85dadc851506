//! The seam between the wizard and the evaluation service.

use std::future::Future;
use std::sync::Arc;

use crate::client::PreevalClient;
use crate::error::Result;
use crate::models::{CreditApplication, EvaluationResult};

/// Anything that can turn a complete application into a decision.
///
/// Implemented by [`PreevalClient`]; tests provide in-memory fakes.
pub trait EvaluationService: Send + Sync {
    fn evaluate(
        &self,
        application: &CreditApplication,
    ) -> impl Future<Output = Result<EvaluationResult>> + Send;
}

impl EvaluationService for PreevalClient {
    fn evaluate(
        &self,
        application: &CreditApplication,
    ) -> impl Future<Output = Result<EvaluationResult>> + Send {
        PreevalClient::evaluate(self, application)
    }
}

impl<T: EvaluationService> EvaluationService for Arc<T> {
    fn evaluate(
        &self,
        application: &CreditApplication,
    ) -> impl Future<Output = Result<EvaluationResult>> + Send {
        (**self).evaluate(application)
    }
}
