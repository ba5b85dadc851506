//! Multi-step credit application wizard.
//!
//! # Submodules
//! - `step`: The step sequence
//! - `draft`: Partial application data and patches
//! - `state`: Observable snapshot
//! - `controller`: Step transitions and submission
//! - [`validation`]: Per-step input rules

mod controller;
mod draft;
mod state;
mod step;
pub mod validation;

pub use controller::WizardController;
pub use draft::{ApplicationDraft, DraftField, DraftUpdate};
pub use state::WizardState;
pub use step::{FORM_STEPS, WizardStep};
pub use validation::{FieldIssue, validate_all, validate_step};
