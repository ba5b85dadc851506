//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Pass the cancellation token to every handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;

use crate::args::Commands;
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::context::CommandContext;

pub(crate) async fn run_command(
    command: Commands,
    ctx: &CommandContext,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        Commands::Apply { .. } => {
            commands::apply::run(ctx, ctx.config.inactivity, cancel).await?;
        }
        Commands::Evaluate { file } => {
            commands::evaluate::run(ctx, &file, cancel).await?;
        }
        Commands::Policy => {
            commands::policy::run(ctx, cancel).await?;
        }
        Commands::Health => {
            commands::health::run(ctx, cancel).await?;
        }
        Commands::Users { command } => {
            commands::users::run(ctx, command, cancel).await?;
        }
        Commands::Date { command } => {
            commands::date::run(ctx, command, cancel).await?;
        }
        Commands::Files { command } => {
            commands::files::run(ctx, command, cancel).await?;
        }
        Commands::System { command } => {
            commands::system::run(ctx, command, cancel).await?;
        }
        Commands::Report { command } => {
            commands::report::run(ctx, command, cancel).await?;
        }
        Commands::Config { command } => {
            commands::config::run(ctx, command)?;
        }
    }

    Ok(())
}
