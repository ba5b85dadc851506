//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide text and JSON renderings for every service response the CLI prints.
//! - Write results to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Progress output (see `progress`, always stderr).
//!
//! Invariants:
//! - JSON output is the service payload as received, pretty-printed.
//! - Text output ends with a newline.

use anyhow::{Context, Result};
use clap::ValueEnum;
use preeval_client::models::{
    DateConfig, FileContent, FileListing, GeneratedReport, LoadingStatus, SystemStatus,
    UserList, UserSession,
};
use preeval_client::{EvaluationResult, HealthStatus, PolicyInfo};
use std::io::Write;
use std::path::{Path, PathBuf};

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Formatter trait for the CLI's output types.
pub trait Formatter {
    fn format_evaluation(&self, result: &EvaluationResult) -> Result<String>;

    fn format_policy(&self, policy: &PolicyInfo) -> Result<String>;

    fn format_health(&self, health: &HealthStatus) -> Result<String>;

    fn format_session(&self, session: &UserSession) -> Result<String>;

    fn format_users(&self, users: &UserList) -> Result<String>;

    fn format_date(&self, date: &DateConfig) -> Result<String>;

    fn format_files(&self, listing: &FileListing) -> Result<String>;

    fn format_file_content(&self, file: &FileContent) -> Result<String>;

    fn format_loading(&self, status: &LoadingStatus) -> Result<String>;

    fn format_system_status(&self, status: &SystemStatus) -> Result<String>;

    fn format_report(&self, report: &GeneratedReport) -> Result<String>;

    /// Format an untyped payload (user stats, file stats, write acknowledgements).
    fn format_value(&self, value: &serde_json::Value) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter),
    }
}

/// Print `output` to stdout, or write it to `output_file` when one is given.
pub fn output_result(output: &str, output_file: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output.as_bytes(), path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Results written to {}", path.display());
    } else {
        print!("{output}");
    }
    Ok(())
}

/// Write `content` to `path` atomically.
///
/// Creates parent directories if needed, writes a temp file in the same
/// directory then renames it over the target.
pub fn write_to_file(content: &[u8], path: &Path) -> Result<()> {
    use tempfile::NamedTempFile;

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content)
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;
    Ok(())
}
