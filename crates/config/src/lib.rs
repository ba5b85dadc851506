//! Configuration management for the credit pre-evaluator.
//!
//! This crate provides the constants, configuration types and the layered
//! loader (config file, environment, explicit overrides) shared by the client,
//! wizard and CLI crates.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError};
pub use types::{Config, InactivityConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
