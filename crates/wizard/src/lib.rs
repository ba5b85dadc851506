//! Credit application wizard and inactivity timer.
//!
//! [`WizardController`] sequences the form steps, accumulates the draft and
//! submits it through an [`EvaluationService`](preeval_client::EvaluationService).
//! [`InactivityMonitor`] runs the session countdown on a tokio task. The two
//! share no state.

pub mod error;
pub mod inactivity;
pub mod wizard;

pub use error::{MonitorError, Result, WizardError};
pub use inactivity::{ActivityKind, InactivityCallbacks, InactivityMonitor, InactivityTimer};
pub use wizard::{
    ApplicationDraft, DraftField, DraftUpdate, FieldIssue, WizardController, WizardState,
    WizardStep,
};
