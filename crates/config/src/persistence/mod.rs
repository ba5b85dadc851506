//! Configuration file persistence.
//!
//! Responsibilities:
//! - Resolve the standard configuration file path.
//! - Read and parse the optional JSON config file.
//! - Write a config file (used by `preeval config init`).
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Validation of the values read from disk (see `loader::builder`).
//!
//! Invariants:
//! - Every field in the config file is optional; a missing file is not an error
//!   unless the path was requested explicitly.

mod file;
mod path;

pub use file::{ConfigFile, ConfigFileError, read_config_file, write_config_file};
pub use path::default_config_path;
