//! Date command implementation.

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;

#[derive(Debug, Subcommand)]
pub enum DateCommand {
    /// Set the system date used to stamp files (day 1-31, month 1-12, year 2020-2030)
    Configure {
        day: u8,
        month: u8,
        year: u16,
    },
    /// Show the system date
    Current,
}

pub async fn run(
    ctx: &CommandContext,
    command: DateCommand,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = ctx.client()?;
    let formatter = ctx.formatter();

    let output = match command {
        DateCommand::Configure { day, month, year } => {
            info!(day, month, year, "Configuring system date");
            let ack = cancellable(cancel, client.configure_date(day, month, year))
                .await
                .context("Failed to configure system date")?;
            formatter.format_value(&ack)?
        }
        DateCommand::Current => {
            let date = cancellable(cancel, client.current_date()).await?;
            formatter.format_date(&date)?
        }
    };

    ctx.emit(&output)
}
