//! Error types for the wizard and the inactivity driver.

use preeval_client::ClientError;
use thiserror::Error;

use crate::wizard::{DraftField, WizardStep};

pub type Result<T> = std::result::Result<T, WizardError>;

/// Message stored when the evaluation failure carries no usable text.
pub const UNKNOWN_EVALUATION_ERROR: &str = "unknown evaluation error";

#[derive(Error, Debug)]
pub enum WizardError {
    /// Required fields were absent at submit time. Never reaches the service.
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<DraftField>),

    /// A submission is already running on this controller.
    #[error("an evaluation is already in progress")]
    SubmissionInFlight,

    /// The evaluation service rejected the application or could not be reached.
    #[error("{message}")]
    Evaluation {
        message: String,
        #[source]
        source: ClientError,
    },

    /// The requested step cannot be entered from the current state.
    #[error("cannot move to the {0} step")]
    StepUnavailable(WizardStep),
}

impl WizardError {
    /// The underlying client error, when the failure came from the service.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Evaluation { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(DraftField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures of the [`InactivityMonitor`](crate::inactivity::InactivityMonitor) driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    /// The driver task has shut down.
    #[error("inactivity monitor is stopped")]
    Stopped,

    /// The driver task ended abnormally.
    #[error("inactivity monitor task failed: {0}")]
    TaskFailed(String),
}
