//! Evaluate command implementation.
//!
//! Responsibilities:
//! - Load a (possibly partial) application from a JSON file.
//! - Submit it through the `WizardController` so missing fields are caught
//!   before any request is made.
//! - Print the evaluation result.
//!
//! Does NOT handle:
//! - Per-step input rules (the evaluation service is the authority here).

use anyhow::{Context, Result, bail};
use preeval_wizard::{DraftUpdate, WizardController};
use std::path::Path;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;
use crate::progress::Spinner;

/// Parse an application file. Unknown keys are ignored, absent keys stay unset.
///
/// A file with none of the application fields is rejected before it reaches
/// the controller.
pub fn load_draft(path: &Path) -> Result<DraftUpdate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read application file: {}", path.display()))?;
    let update: DraftUpdate = serde_json::from_str(&content)
        .with_context(|| format!("Invalid application JSON in {}", path.display()))?;
    if update.is_empty() {
        bail!(
            "Application file has no recognised fields: {}",
            path.display()
        );
    }
    Ok(update)
}

pub async fn run(ctx: &CommandContext, file: &Path, cancel: &CancellationToken) -> Result<()> {
    let update = load_draft(file)?;
    info!(file = %file.display(), "Evaluating application from file");

    let controller = WizardController::new(ctx.client()?);
    controller.update_data(update);

    let spinner = Spinner::new(ctx.progress_enabled(), "Evaluating application");
    let result = cancellable(cancel, controller.submit_application())
        .await
        .context("Evaluation failed")?;
    spinner.finish();

    let output = ctx.formatter().format_evaluation(&result)?;
    ctx.emit(&output)
}
