//! System command implementation.

use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;
use crate::progress::Spinner;

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Show versions, loaded modules and statistics
    Status,
    /// Run the startup sequence and print its messages
    Loading,
}

pub async fn run(
    ctx: &CommandContext,
    command: SystemCommand,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = ctx.client()?;
    let formatter = ctx.formatter();

    let output = match command {
        SystemCommand::Status => {
            let status = cancellable(cancel, client.system_status()).await?;
            formatter.format_system_status(&status)?
        }
        SystemCommand::Loading => {
            info!("Running system startup sequence");
            let spinner = Spinner::new(ctx.progress_enabled(), "Loading system");
            let status = cancellable(cancel, client.simulate_loading()).await?;
            spinner.finish();
            formatter.format_loading(&status)?
        }
    };

    ctx.emit(&output)
}
