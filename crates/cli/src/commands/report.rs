//! Report command implementation.

use anyhow::{Context, Result};
use clap::Subcommand;
use preeval_client::ReportRequest;
use std::path::PathBuf;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;
use crate::formatters::write_to_file;
use crate::progress::Spinner;

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Generate a Markdown report of the system state
    Generate {
        /// Report kind
        #[arg(long, default_value = "completo")]
        kind: String,
        /// Leave out the users section
        #[arg(long)]
        no_users: bool,
        /// Leave out the files section
        #[arg(long)]
        no_files: bool,
        /// Leave out the dates section
        #[arg(long)]
        no_dates: bool,
        /// Leave out the statistics section
        #[arg(long)]
        no_stats: bool,
    },
    /// Download a generated report
    Download {
        /// Report file name as returned by `report generate`
        name: String,
        /// Where to save the report (prints to stdout when omitted)
        #[arg(long, value_name = "PATH")]
        dest: Option<PathBuf>,
    },
}

pub async fn run(
    ctx: &CommandContext,
    command: ReportCommand,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = ctx.client()?;

    match command {
        ReportCommand::Generate {
            kind,
            no_users,
            no_files,
            no_dates,
            no_stats,
        } => {
            let request = ReportRequest {
                kind,
                include_users: !no_users,
                include_files: !no_files,
                include_dates: !no_dates,
                include_stats: !no_stats,
            };
            info!(kind = %request.kind, "Generating report");
            let spinner = Spinner::new(ctx.progress_enabled(), "Generating report");
            let report = cancellable(cancel, client.generate_report(&request))
                .await
                .context("Failed to generate report")?;
            spinner.finish();

            let output = ctx.formatter().format_report(&report)?;
            ctx.emit(&output)?;
            if !report.succeeded {
                anyhow::bail!(
                    "report generation failed: {}",
                    report.error.as_deref().unwrap_or("unknown error")
                );
            }
            Ok(())
        }
        ReportCommand::Download { name, dest } => {
            let bytes = cancellable(cancel, client.download_report(&name))
                .await
                .with_context(|| format!("Failed to download report '{name}'"))?;
            match dest {
                Some(path) => {
                    write_to_file(&bytes, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    eprintln!("Report saved to {} ({} bytes)", path.display(), bytes.len());
                    Ok(())
                }
                None => ctx.emit(&String::from_utf8_lossy(&bytes)),
            }
        }
    }
}
