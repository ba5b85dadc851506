//! Policy command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;

pub async fn run(ctx: &CommandContext, cancel: &CancellationToken) -> Result<()> {
    info!("Fetching credit policy");

    let client = ctx.client()?;
    let policy = cancellable(cancel, client.get_policy())
        .await
        .context("Failed to fetch credit policy")?;

    let output = ctx.formatter().format_policy(&policy)?;
    ctx.emit(&output)
}
