//! User session endpoint tests for the advanced API.

mod common;

use common::*;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_login_user_sends_trimmed_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/advanced/users/login"))
        .and(body_json(serde_json::json!({ "nombre": "ana" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("advanced/login.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = client_for(&mock_server).login_user("  ana ").await.unwrap();

    assert_eq!(session.session_id, "sess-4f1c");
    assert_eq!(session.user.full_name, "ana");
    assert_eq!(session.user.total_sessions, 3);
}

#[tokio::test]
async fn test_login_user_rejects_short_name_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/advanced/users/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).login_user("a").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_change_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/advanced/users/change"))
        .and(body_json(serde_json::json!({ "nombre_nuevo": "luis" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "usuario_anterior": "ana", "usuario_nuevo": "luis" }
        })))
        .mount(&mock_server)
        .await;

    let data = client_for(&mock_server).change_user("luis").await.unwrap();
    assert_eq!(data["usuario_nuevo"], "luis");
}

#[tokio::test]
async fn test_current_user_without_session_is_unsuccessful() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/advanced/users/current"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("advanced/no_active_user.json")),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).current_user().await.unwrap_err();
    match err {
        ClientError::Unsuccessful(message) => assert_eq!(message, "No hay usuario activo"),
        other => panic!("expected Unsuccessful, got {other:?}"),
    }
}

#[tokio::test]
async fn test_user_stats_and_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/advanced/users/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "total_usuarios": 2 }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/advanced/users/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "usuarios": [{ "nombre": "ana" }, { "nombre": "luis" }] }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let stats = client.user_stats().await.unwrap();
    assert_eq!(stats["total_usuarios"], 2);

    let list = client.list_users().await.unwrap();
    assert_eq!(list.users.len(), 2);
}
