//! Users command implementation.
//!
//! Responsibilities:
//! - Log a user in and switch the active user.
//! - Show the current user, user statistics and the known users.
//!
//! Does NOT handle:
//! - User name rules (checked by the client before any request).

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::context::CommandContext;

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// Log in as a user (2 to 20 characters)
    Login {
        /// User name
        name: String,
    },
    /// Switch the active user
    Change {
        /// New user name
        new_name: String,
    },
    /// Show the logged-in user
    Current,
    /// Show user statistics
    Stats,
    /// List known users
    List,
}

pub async fn run(
    ctx: &CommandContext,
    command: UsersCommand,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = ctx.client()?;
    let formatter = ctx.formatter();

    let output = match command {
        UsersCommand::Login { name } => {
            info!(user = %name, "Logging in");
            let session = cancellable(cancel, client.login_user(&name))
                .await
                .with_context(|| format!("Failed to log in as '{name}'"))?;
            formatter.format_session(&session)?
        }
        UsersCommand::Change { new_name } => {
            info!(user = %new_name, "Changing active user");
            let ack = cancellable(cancel, client.change_user(&new_name))
                .await
                .with_context(|| format!("Failed to change user to '{new_name}'"))?;
            formatter.format_value(&ack)?
        }
        UsersCommand::Current => {
            let user = cancellable(cancel, client.current_user()).await?;
            formatter.format_value(&user)?
        }
        UsersCommand::Stats => {
            let stats = cancellable(cancel, client.user_stats()).await?;
            formatter.format_value(&stats)?
        }
        UsersCommand::List => {
            let users = cancellable(cancel, client.list_users()).await?;
            formatter.format_users(&users)?
        }
    };

    ctx.emit(&output)
}
