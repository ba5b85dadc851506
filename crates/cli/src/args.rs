//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read global options from flags or `PREEVAL_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use preeval_client::LogFormat;
use std::path::PathBuf;

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "preeval")]
#[command(about = "Credit pre-evaluator - apply for credit and manage the evaluation service", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  preeval apply\n  preeval evaluate --file application.json\n  preeval --output json policy\n  preeval users login ana\n  preeval files read notas.txt\n  preeval report download reporte.md --dest ./reporte.md\n"
)]
pub struct Cli {
    /// Base URL of the evaluation service (e.g., http://localhost:8000)
    #[arg(long, global = true, env = "PREEVAL_API_URL")]
    pub api_url: Option<String>,

    /// Base URL of the advanced API (defaults to <api-url>/advanced)
    #[arg(long, global = true, env = "PREEVAL_ADVANCED_URL")]
    pub advanced_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PREEVAL_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to a custom configuration file (overrides default location).
    #[arg(long, global = true, env = "PREEVAL_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    /// OTLP collector endpoint for trace export (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "PREEVAL_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    /// Suppress progress spinners.
    ///
    /// Progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in a credit application step by step and submit it
    Apply {
        /// Minutes of inactivity before the session asks whether to continue
        #[arg(long, env = "PREEVAL_INACTIVITY_MINUTES")]
        inactivity_minutes: Option<u32>,
    },

    /// Submit an application read from a JSON file
    Evaluate {
        /// JSON file with the application fields (partial files are reported as missing fields)
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the credit policy limits
    Policy,

    /// Check that the evaluation service is up
    Health,

    /// Log in, switch and inspect users
    Users {
        #[command(subcommand)]
        command: commands::users::UsersCommand,
    },

    /// Configure or show the system date
    Date {
        #[command(subcommand)]
        command: commands::date::DateCommand,
    },

    /// List, read, write and create files
    Files {
        #[command(subcommand)]
        command: commands::files::FilesCommand,
    },

    /// Show system status or run the startup sequence
    System {
        #[command(subcommand)]
        command: commands::system::SystemCommand,
    },

    /// Generate and download reports
    Report {
        #[command(subcommand)]
        command: commands::report::ReportCommand,
    },

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

impl Commands {
    /// Inactivity override carried by `apply`, if any.
    pub fn inactivity_minutes(&self) -> Option<u32> {
        match self {
            Commands::Apply { inactivity_minutes } => *inactivity_minutes,
            _ => None,
        }
    }

    /// Whether configuration loading should read the config file.
    pub fn reads_config_file(&self) -> bool {
        match self {
            Commands::Config { command } => command.reads_config_file(),
            _ => true,
        }
    }
}
