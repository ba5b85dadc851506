//! User session methods for [`PreevalClient`].
//!
//! # What this module does NOT handle:
//! - Authentication. The advanced API tracks a single active user by name.

use serde_json::Value;

use crate::client::PreevalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{UserList, UserSession};

impl PreevalClient {
    pub async fn login_user(&self, name: &str) -> Result<UserSession> {
        endpoints::login_user(&self.http, &self.advanced_url, name, self.metrics.as_ref()).await
    }

    pub async fn change_user(&self, new_name: &str) -> Result<Value> {
        endpoints::change_user(
            &self.http,
            &self.advanced_url,
            new_name,
            self.metrics.as_ref(),
        )
        .await
    }

    pub async fn current_user(&self) -> Result<Value> {
        endpoints::current_user(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }

    pub async fn user_stats(&self) -> Result<Value> {
        endpoints::user_stats(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }

    pub async fn list_users(&self) -> Result<UserList> {
        endpoints::list_users(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }
}
