//! Shared test utilities for `preeval` integration tests.
//!
//! Invariants:
//! - Every command is hermetic: no `.env`, no inherited `PREEVAL_*` variables.
//! - `preeval_cmd_for` points the evaluation URL at a mock server; the advanced
//!   API then lives under `/advanced` on the same server.

use assert_cmd::Command;
use wiremock::MockServer;

#[allow(unused_imports)]
pub use preeval_client::testing::load_fixture;

/// Returns a hermetic `preeval` command.
#[allow(dead_code)]
pub fn preeval_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("preeval");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("PREEVAL_API_URL")
        .env_remove("PREEVAL_ADVANCED_URL")
        .env_remove("PREEVAL_TIMEOUT")
        .env_remove("PREEVAL_INACTIVITY_MINUTES")
        .env_remove("PREEVAL_CONFIG_PATH")
        .env_remove("PREEVAL_OTLP_ENDPOINT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `preeval` command talking to `server`.
#[allow(dead_code)]
pub fn preeval_cmd_for(server: &MockServer) -> Command {
    let mut cmd = preeval_cmd();
    cmd.env("PREEVAL_API_URL", server.uri());
    cmd.env("PREEVAL_TIMEOUT", "5");
    cmd
}

/// A complete application file body.
#[allow(dead_code)]
pub fn full_application() -> serde_json::Value {
    serde_json::json!({
        "name": "Ana Torres",
        "age": 34,
        "monthly_income": 25000.0,
        "monthly_debt": 3000.0,
        "employment_type": "EMPLOYEE",
        "months_of_experience": 48,
        "credit_score": 720,
        "amount": 100000.0,
        "term": 36,
        "active_defaults": false
    })
}

/// Write `body` to `app.json` inside `dir` and return the path.
#[allow(dead_code)]
pub fn write_application(dir: &tempfile::TempDir, body: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("app.json");
    std::fs::write(&path, serde_json::to_string_pretty(body).unwrap()).unwrap();
    path
}
