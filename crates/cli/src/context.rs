//! Execution context shared by every command.
//!
//! Responsibilities:
//! - Carry the loaded configuration and the global output options.
//! - Build the `PreevalClient` commands talk through.
//!
//! Does NOT handle:
//! - Configuration loading (done in `main()`).

use anyhow::{Context, Result};
use preeval_client::{MetricsCollector, PreevalClient};
use preeval_config::Config;
use std::path::PathBuf;

use crate::formatters::{Formatter, OutputFormat, get_formatter, output_result};

pub(crate) struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    /// Explicit config file location, if one was given.
    pub config_path: Option<PathBuf>,
    /// Attach a metrics collector to the client (set when an exporter is running).
    pub metrics: bool,
}

impl CommandContext {
    /// Build a client from the loaded configuration.
    pub fn client(&self) -> Result<PreevalClient> {
        let mut builder = PreevalClient::builder().from_config(&self.config);
        if self.metrics {
            builder = builder.metrics(MetricsCollector::new());
        }
        builder.build().context("Failed to build client")
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        get_formatter(self.format)
    }

    /// Print already formatted output, honouring `--output-file`.
    pub fn emit(&self, output: &str) -> Result<()> {
        output_result(output, self.output_file.as_ref())
    }

    pub fn progress_enabled(&self) -> bool {
        !self.quiet
    }
}
