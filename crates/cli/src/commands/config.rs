//! Config command implementation.
//!
//! Responsibilities:
//! - Show the effective configuration after every source is applied.
//! - Write the effective configuration to the config file.
//!
//! Does NOT handle:
//! - Loading configuration (done in `main()`).

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use preeval_config::ConfigFile;
use preeval_config::persistence::{default_config_path, write_config_file};
use tracing::info;

use crate::context::CommandContext;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write the effective configuration (defaults, environment and flags) to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    /// `init` builds its file from defaults, environment and flags only.
    pub fn reads_config_file(&self) -> bool {
        !matches!(self, ConfigCommand::Init { .. })
    }
}

pub fn run(ctx: &CommandContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let value = serde_json::to_value(&ctx.config)?;
            let output = ctx.formatter().format_value(&value)?;
            ctx.emit(&output)
        }
        ConfigCommand::Init { force } => {
            let path = match &ctx.config_path {
                Some(path) => path.clone(),
                None => default_config_path()?,
            };
            if path.exists() && !force {
                bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }

            write_config_file(&path, &ConfigFile::from(&ctx.config))
                .context("Failed to write config file")?;
            info!(path = %path.display(), "Config file written");
            eprintln!("Config written to {}", path.display());
            Ok(())
        }
    }
}
