//! Command handlers, one module per top-level subcommand.

pub mod apply;
pub mod config;
pub mod date;
pub mod evaluate;
pub mod files;
pub mod health;
pub mod policy;
pub mod report;
pub mod system;
pub mod users;
