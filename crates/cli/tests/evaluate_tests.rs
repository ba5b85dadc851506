//! Integration tests for `preeval evaluate`.

mod common;

use common::{full_application, load_fixture, preeval_cmd_for, write_application};
use predicates::prelude::*;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_evaluate_prints_decision() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/evaluate"))
        .and(body_partial_json(serde_json::json!({
            "name": "Ana Torres",
            "credit_score": 720,
            "employment_type": "EMPLOYEE"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("credit/evaluate_approved.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_application(&dir, &full_application());

    preeval_cmd_for(&server)
        .args(["evaluate", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Decision: APPROVED"))
        .stdout(predicate::str::contains("Reference: EVAL-20250928-0001"));
}

#[tokio::test]
async fn test_evaluate_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/evaluate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("credit/evaluate_counteroffer.json")),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_application(&dir, &full_application());

    let output = preeval_cmd_for(&server)
        .args(["--output", "json", "evaluate", "--file"])
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["decision"], "COUNTEROFFER");
}

#[tokio::test]
async fn test_evaluate_missing_fields_exit_5_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/evaluate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut body = full_application();
    body.as_object_mut().unwrap().remove("credit_score");
    let dir = tempfile::tempdir().unwrap();
    let file = write_application(&dir, &body);

    preeval_cmd_for(&server)
        .args(["evaluate", "--file"])
        .arg(&file)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("missing required fields: credit_score"));
}

#[tokio::test]
async fn test_evaluate_service_unavailable_exit_8() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/evaluate"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({ "detail": "evaluation engine offline" })),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_application(&dir, &full_application());

    preeval_cmd_for(&server)
        .args(["evaluate", "--file"])
        .arg(&file)
        .assert()
        .code(8)
        .stderr(predicate::str::contains("evaluation engine offline"));
}

#[tokio::test]
async fn test_evaluate_rejected_by_schema_exit_5() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/evaluate"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(load_fixture("errors/validation_detail.json")),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_application(&dir, &full_application());

    preeval_cmd_for(&server)
        .args(["evaluate", "--file"])
        .arg(&file)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("age: ensure this value"));
}

#[test]
fn test_evaluate_unreadable_file_is_general_error() {
    common::preeval_cmd()
        .args(["evaluate", "--file", "/nonexistent/app.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read application file"));
}
