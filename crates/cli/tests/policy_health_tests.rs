//! Integration tests for `preeval policy` and `preeval health`.

mod common;

use common::{load_fixture, preeval_cmd_for};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_policy_text_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/policy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("credit/policy.json")))
        .expect(1)
        .mount(&server)
        .await;

    preeval_cmd_for(&server)
        .arg("policy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Credit policy"))
        .stdout(predicate::str::contains("Age: 18 to 69"))
        .stdout(predicate::str::contains("Minimum monthly income: 7500.00"));
}

#[tokio::test]
async fn test_policy_json_output_to_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/policy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("credit/policy.json")))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("policy.json");

    preeval_cmd_for(&server)
        .args(["--output", "json", "--output-file"])
        .arg(&out)
        .arg("policy")
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(saved["credit_score_limits"]["min_score"], 600);
    assert_eq!(saved["loan_limits"]["max_term"], 60);
}

#[tokio::test]
async fn test_health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("credit/health.json")))
        .mount(&server)
        .await;

    preeval_cmd_for(&server)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: healthy"))
        .stdout(predicate::str::contains("Credit evaluation service is running"));
}

#[tokio::test]
async fn test_health_server_error_is_general_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    preeval_cmd_for(&server)
        .arg("health")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("500"));
}
