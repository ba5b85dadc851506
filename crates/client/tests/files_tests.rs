//! File management endpoint tests for the advanced API.

mod common;

use common::*;
use preeval_client::models::FileOrigin;
use preeval_client::{FileCreateRequest, FileWriteRequest};
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_list_files() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/advanced/files/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("advanced/files_list.json")),
        )
        .mount(&mock_server)
        .await;

    let listing = client_for(&mock_server).list_files().await.unwrap();

    assert_eq!(listing.total, 2);
    assert_eq!(listing.files[0].origin, FileOrigin::Predefined);
    assert!(listing.files[0].read_only);
    assert_eq!(listing.files[1].author, "ana");
    assert_eq!(listing.queried_on.map(|d| d.to_string()).as_deref(), Some("28/09/2025"));
}

#[tokio::test]
async fn test_read_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/advanced/files/read"))
        .and(body_json(serde_json::json!({ "nombre_archivo": "notas.txt" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("advanced/file_read.json")),
        )
        .mount(&mock_server)
        .await;

    let file = client_for(&mock_server).read_file("notas.txt").await.unwrap();

    assert_eq!(file.content, "primera linea\nsegunda");
    assert_eq!(file.stats.lines, 2);
    assert!(!file.metadata.read_only);
}

#[tokio::test]
async fn test_read_missing_file_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/advanced/files/read"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .read_file("missing.txt")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Archivo 'missing.txt' no encontrado");
}

#[tokio::test]
async fn test_write_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/advanced/files/write"))
        .and(body_json(serde_json::json!({
            "nombre_archivo": "notas.txt",
            "contenido": "nuevo",
            "autor": "ana"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "nombre_archivo": "notas.txt", "tamaño_bytes": 5 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = FileWriteRequest {
        file_name: "notas.txt".to_string(),
        content: "nuevo".to_string(),
        author: "ana".to_string(),
    };
    let data = client_for(&mock_server).write_file(&request).await.unwrap();
    assert_eq!(data["tamaño_bytes"], 5);
}

#[tokio::test]
async fn test_create_file_omits_missing_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/advanced/files/create"))
        .and(body_json(serde_json::json!({
            "nombre_archivo": "plan.txt",
            "contenido": "",
            "autor": "ana",
            "tipo": "texto"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "nombre_archivo": "plan.txt" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = FileCreateRequest {
        file_name: "plan.txt".to_string(),
        content: String::new(),
        author: "ana".to_string(),
        kind: FileCreateRequest::DEFAULT_KIND.to_string(),
        description: None,
    };
    client_for(&mock_server).create_file(&request).await.unwrap();
}

#[tokio::test]
async fn test_create_file_requires_author() {
    let mock_server = MockServer::start().await;
    let request = FileCreateRequest {
        file_name: "plan.txt".to_string(),
        content: String::new(),
        author: "  ".to_string(),
        kind: FileCreateRequest::DEFAULT_KIND.to_string(),
        description: None,
    };

    let err = client_for(&mock_server)
        .create_file(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidRequest(msg) if msg.contains("author")));
}

#[tokio::test]
async fn test_file_stats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/advanced/files/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "total_archivos": 2, "tamaño_total_bytes": 536 }
        })))
        .mount(&mock_server)
        .await;

    let stats = client_for(&mock_server).file_stats().await.unwrap();
    assert_eq!(stats["total_archivos"], 2);
}
