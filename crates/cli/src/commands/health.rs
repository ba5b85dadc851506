//! Health command implementation.

use anyhow::Result;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;

pub async fn run(ctx: &CommandContext, cancel: &CancellationToken) -> Result<()> {
    info!(api_url = %ctx.config.api_url, "Checking evaluation service health");

    let client = ctx.client()?;
    let health = cancellable(cancel, client.check_health()).await?;

    if !health.is_healthy() {
        tracing::warn!(status = %health.status, "Evaluation service reports a degraded status");
    }

    let output = ctx.formatter().format_health(&health)?;
    ctx.emit(&output)
}
