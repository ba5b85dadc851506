//! preeval - command-line front end for the credit pre-evaluator.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run the application wizard, the evaluation/advanced API commands and the
//!   config file commands.
//! - Format results as text or JSON and map failures to exit codes.
//!
//! Does NOT handle:
//! - HTTP plumbing (see `crates/client`).
//! - Wizard and inactivity semantics (see `crates/wizard`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - CLI flags override environment variables, which override the config file.

mod args;
mod cancellation;
mod commands;
mod context;
mod dispatch;
mod error;
mod formatters;
mod progress;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use context::CommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use preeval_config::{Config, ConfigLoader};
use std::path::PathBuf;
use std::time::Duration;

/// Merge CLI overrides over the config file and `PREEVAL_*` variables.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(path) = explicit_config_path(cli) {
        loader = loader.with_config_path(path);
    }

    if let Some(ref url) = cli.api_url {
        loader = loader.with_api_url(url.clone());
    }
    if let Some(ref url) = cli.advanced_url {
        loader = loader.with_advanced_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(minutes) = cli.command.inactivity_minutes() {
        loader = loader.with_inactivity_minutes(minutes);
    }

    // Each source only fills fields still unset, so overrides above win.
    let mut loader = loader.from_env()?;
    if cli.command.reads_config_file() {
        loader = loader.from_file()?;
    }
    Ok(loader.build()?)
}

/// `--config-path`, ignoring blank values so the environment variable applies.
fn explicit_config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config_path
        .as_ref()
        .filter(|path| !path.to_string_lossy().trim().is_empty())
        .cloned()
}

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // Prompts share stderr with logs, so the CLI is quieter than the library default.
    let mut tracing_config = preeval_client::TracingConfig::new()
        .with_service_name("preeval-cli")
        .with_log_format(cli.log_format.into())
        .with_default_filter("warn");
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match preeval_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };
    tracing::debug!(
        api_url = %config.api_url,
        advanced_url = %config.advanced_url,
        "Configuration loaded"
    );

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let ctx = CommandContext {
        config_path: explicit_config_path(&cli),
        config,
        format: cli.output,
        output_file: cli.output_file,
        quiet: cli.quiet,
        metrics: metrics_exporter.is_some(),
    };

    let exit_code = match run_command(cli.command, &ctx, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    // Flush pending spans before exiting.
    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}
