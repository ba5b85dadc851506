//! The wizard controller.
//!
//! Responsibilities:
//! - Sequence the form steps and accumulate the draft
//! - Submit the completed application to an [`EvaluationService`] once
//! - Expose loading/error/result state to whatever renders the wizard
//!
//! Does NOT handle:
//! - Per-step input rules (see [`crate::wizard::validation`]); callers gate
//!   `next_step` and `submit_application` on them
//!
//! # Invariants
//! - The state mutex is never held across an `.await`
//! - At most one submission runs at a time; a second call is rejected with
//!   [`WizardError::SubmissionInFlight`] without touching state
//! - `is_loading` is cleared even if the submission future is dropped

use std::sync::{Mutex, MutexGuard, PoisonError};

use preeval_client::{EvaluationResult, EvaluationService};
use tracing::{debug, info, warn};

use crate::error::{Result, UNKNOWN_EVALUATION_ERROR, WizardError};
use crate::wizard::{DraftUpdate, WizardState, WizardStep};

pub struct WizardController<S> {
    service: S,
    state: Mutex<WizardState>,
}

impl<S: EvaluationService> WizardController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(WizardState::initial()),
        }
    }

    /// The evaluation collaborator this controller submits to.
    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn snapshot(&self) -> WizardState {
        self.lock().clone()
    }

    pub fn current_step(&self) -> WizardStep {
        self.lock().current_step
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    /// Shallow-merge `update` into the draft. No validation.
    pub fn update_data(&self, update: DraftUpdate) {
        self.lock().draft.merge(update);
    }

    /// Advance one form step. No-op at `Credit` and `Result`.
    pub fn next_step(&self) -> WizardStep {
        let mut state = self.lock();
        if let Some(next) = state.current_step.next() {
            debug!(from = %state.current_step, to = %next, "Wizard step advanced");
            state.current_step = next;
        }
        state.current_step
    }

    /// Go back one form step. No-op at `Personal` and `Result`.
    pub fn prev_step(&self) -> WizardStep {
        let mut state = self.lock();
        if let Some(prev) = state.current_step.previous() {
            debug!(from = %state.current_step, to = %prev, "Wizard step moved back");
            state.current_step = prev;
        }
        state.current_step
    }

    /// Jump directly to a form step.
    ///
    /// `Result` is only reachable through a successful submission, and a
    /// completed wizard only leaves `Result` through [`reset`](Self::reset).
    pub fn go_to_step(&self, step: WizardStep) -> Result<()> {
        let mut state = self.lock();
        if state.current_step == step {
            return Ok(());
        }
        if !step.is_form_step() || !state.current_step.is_form_step() {
            return Err(WizardError::StepUnavailable(step));
        }
        debug!(from = %state.current_step, to = %step, "Wizard step jumped");
        state.current_step = step;
        Ok(())
    }

    /// Return to the initial state.
    pub fn reset(&self) {
        let mut state = self.lock();
        *state = WizardState::initial();
        debug!("Wizard reset");
    }

    /// Clear the error, keeping the draft and current step.
    pub fn dismiss_error(&self) {
        self.lock().error = None;
    }

    /// Submit the draft to the evaluation service.
    ///
    /// On success the result is stored and the wizard moves to `Result`. On
    /// failure the error message is stored and the step is left unchanged.
    pub async fn submit_application(&self) -> Result<EvaluationResult> {
        let application = {
            let mut state = self.lock();
            if state.is_loading {
                debug!("Submission rejected, another one is in flight");
                return Err(WizardError::SubmissionInFlight);
            }
            match state.draft.to_application() {
                Ok(application) => {
                    state.is_loading = true;
                    state.error = None;
                    application
                }
                Err(err) => {
                    warn!(error = %err, "Submission blocked by missing fields");
                    state.error = Some(err.to_string());
                    return Err(err);
                }
            }
        };

        info!(amount = application.amount, term = application.term, "Submitting application");
        let in_flight = InFlight::arm(&self.state);
        let outcome = self.service.evaluate(&application).await;
        in_flight.disarm();

        let mut state = self.lock();
        state.is_loading = false;
        match outcome {
            Ok(result) => {
                info!(
                    reference = %result.reference,
                    decision = %result.decision,
                    "Evaluation completed"
                );
                state.result = Some(result.clone());
                state.current_step = WizardStep::Result;
                Ok(result)
            }
            Err(source) => {
                let message = source.user_message();
                let message = if message.trim().is_empty() {
                    UNKNOWN_EVALUATION_ERROR.to_string()
                } else {
                    message
                };
                warn!(error = %source, step = %state.current_step, "Evaluation failed");
                state.error = Some(message.clone());
                Err(WizardError::Evaluation { message, source })
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, WizardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears `is_loading` if the submission future is dropped mid-flight.
struct InFlight<'a> {
    state: Option<&'a Mutex<WizardState>>,
}

impl<'a> InFlight<'a> {
    fn arm(state: &'a Mutex<WizardState>) -> Self {
        Self { state: Some(state) }
    }

    fn disarm(mut self) {
        self.state = None;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.is_loading = false;
            debug!("Submission cancelled before completion");
        }
    }
}
