//! User session endpoints of the advanced API.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::request::{get_data, post_data};
use crate::endpoints::validation::check_user_name;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ChangeUserRequest, LoginRequest, UserList, UserSession};

/// Log a user in and return the new session.
pub async fn login_user(
    client: &Client,
    base_url: &str,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<UserSession> {
    let body = LoginRequest {
        name: check_user_name(name)?,
    };
    post_data(client, base_url, "/users/login", Some(&body), metrics).await
}

/// Switch the active user.
pub async fn change_user(
    client: &Client,
    base_url: &str,
    new_name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    let body = ChangeUserRequest {
        new_name: check_user_name(new_name)?,
    };
    post_data(client, base_url, "/users/change", Some(&body), metrics).await
}

/// Current user; fails with `Unsuccessful` when nobody is logged in.
pub async fn current_user(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    get_data(client, base_url, "/users/current", metrics).await
}

pub async fn user_stats(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    get_data(client, base_url, "/users/stats", metrics).await
}

pub async fn list_users(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<UserList> {
    get_data(client, base_url, "/users/list", metrics).await
}
