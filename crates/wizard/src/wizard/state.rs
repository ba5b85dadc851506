//! Observable wizard state.

use preeval_client::EvaluationResult;
use serde::Serialize;

use crate::wizard::{ApplicationDraft, WizardStep};

/// Snapshot of the wizard.
///
/// `result` is set only when `current_step` is `Result`; `is_loading` is
/// true only while one submission is in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub draft: ApplicationDraft,
    pub result: Option<EvaluationResult>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl WizardState {
    /// Personal step, empty draft, no result, not loading, no error.
    pub fn initial() -> Self {
        Self::default()
    }
}
