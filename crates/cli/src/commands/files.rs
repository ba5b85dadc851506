//! Files command implementation.
//!
//! Responsibilities:
//! - List, read, overwrite and create files on the advanced API.
//! - Take file content inline or from a local file.
//!
//! Does NOT handle:
//! - Read-only enforcement (the service rejects writes to predefined files).

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use preeval_client::models::{FileCreateRequest, FileWriteRequest};
use std::path::PathBuf;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;

#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// List every file
    List,
    /// Print one file
    Read {
        /// File name
        name: String,
    },
    /// Overwrite an existing file
    Write {
        /// File name
        name: String,
        #[command(flatten)]
        content: ContentArgs,
        /// Author recorded on the file
        #[arg(long)]
        author: String,
    },
    /// Create a new file
    Create {
        /// File name
        name: String,
        #[command(flatten)]
        content: ContentArgs,
        /// Author recorded on the file
        #[arg(long)]
        author: String,
        /// File kind
        #[arg(long, default_value = FileCreateRequest::DEFAULT_KIND)]
        kind: String,
        /// Short description
        #[arg(long)]
        description: Option<String>,
    },
    /// Show file statistics
    Stats,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ContentArgs {
    /// Content given inline
    #[arg(long)]
    pub content: Option<String>,
    /// Read the content from a local file
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

impl ContentArgs {
    fn resolve(self) -> Result<String> {
        match (self.content, self.from_file) {
            (Some(content), _) => Ok(content),
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => anyhow::bail!("either --content or --from-file is required"),
        }
    }
}

pub async fn run(
    ctx: &CommandContext,
    command: FilesCommand,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = ctx.client()?;
    let formatter = ctx.formatter();

    let output = match command {
        FilesCommand::List => {
            let listing = cancellable(cancel, client.list_files()).await?;
            formatter.format_files(&listing)?
        }
        FilesCommand::Read { name } => {
            let file = cancellable(cancel, client.read_file(&name))
                .await
                .with_context(|| format!("Failed to read file '{name}'"))?;
            formatter.format_file_content(&file)?
        }
        FilesCommand::Write {
            name,
            content,
            author,
        } => {
            let request = FileWriteRequest {
                file_name: name,
                content: content.resolve()?,
                author,
            };
            info!(file = %request.file_name, "Writing file");
            let ack = cancellable(cancel, client.write_file(&request))
                .await
                .with_context(|| format!("Failed to write file '{}'", request.file_name))?;
            formatter.format_value(&ack)?
        }
        FilesCommand::Create {
            name,
            content,
            author,
            kind,
            description,
        } => {
            let request = FileCreateRequest {
                file_name: name,
                content: content.resolve()?,
                author,
                kind,
                description,
            };
            info!(file = %request.file_name, "Creating file");
            let ack = cancellable(cancel, client.create_file(&request))
                .await
                .with_context(|| format!("Failed to create file '{}'", request.file_name))?;
            formatter.format_value(&ack)?
        }
        FilesCommand::Stats => {
            let stats = cancellable(cancel, client.file_stats()).await?;
            formatter.format_value(&stats)?
        }
    };

    ctx.emit(&output)
}
