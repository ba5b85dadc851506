//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, the base URL it talks to
//! and an optional metrics collector. Credit endpoints use the evaluation
//! service URL; everything else uses the advanced API URL.

mod credit;
mod dates;
mod files;
mod reports;
mod request;
mod system;
pub mod url_encoding;
mod users;
pub mod validation;

pub use credit::{EVALUATE_PATH, HEALTH_PATH, POLICY_PATH, check_health, evaluate, get_policy};
pub use dates::{configure_date, current_date};
pub use files::{create_file, file_stats, list_files, read_file, write_file};
pub use reports::{download_report, generate_report};
pub use request::{read_json, send_request};
pub use system::{simulate_loading, system_status};
pub use url_encoding::encode_path_segment;
pub use users::{change_user, current_user, list_users, login_user, user_stats};
