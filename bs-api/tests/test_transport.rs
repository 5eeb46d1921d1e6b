//! Request pipeline behaviour against a live local server.

mod common;

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Method;
use serde_json::json;

use bs_api::{ApiClient, AttachmentParams, BookParams, QueryParams};
use bs_core::BsError;
use common::MockServer;

#[tokio::test]
async fn test_token_header_and_path() {
    let server = MockServer::new()
        .json(Method::GET, "/api/books", 200, json!({ "data": [], "total": 0 }))
        .start()
        .await;

    server.client().list_books(None).await.unwrap();

    let req = server.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.uri, "/api/books");
    assert_eq!(req.header("authorization").as_deref(), Some("Token test-id:test-secret"));
    assert!(req.header("content-type").is_none());
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let server = MockServer::new()
        .json(Method::GET, "/api/pages", 200, json!({ "data": [] }))
        .start()
        .await;

    let client = ApiClient::builder()
        .url(format!("{}/", server.base_url()))
        .token("a", "b")
        .build()
        .unwrap();
    client.list_pages(None).await.unwrap();

    assert_eq!(server.only_request().uri, "/api/pages");
}

#[tokio::test]
async fn test_query_params_on_wire() {
    let server = MockServer::new()
        .json(Method::GET, "/api/books", 200, json!({ "data": [] }))
        .start()
        .await;

    let q = QueryParams::new().count(10).offset(20).sort("name", false);
    server.client().list_books(Some(&q)).await.unwrap();

    assert_eq!(
        server.only_request().uri,
        "/api/books?count=10&offset=20&sort=%2Bname"
    );
}

#[tokio::test]
async fn test_success_range_includes_208() {
    let server = MockServer::new()
        .route(Method::DELETE, "/api/books/1", 208, "")
        .route(Method::DELETE, "/api/books/2", 209, "{}")
        .start()
        .await;
    let client = server.client();

    assert!(client.delete_book(1).await.unwrap());

    let err = client.delete_book(2).await.unwrap_err();
    assert_eq!(err.api_code(), Some(209));
}

#[tokio::test]
async fn test_error_envelope_becomes_api_error() {
    let server = MockServer::new()
        .json(
            Method::GET,
            "/api/books/99",
            404,
            json!({ "error": { "code": 404, "message": "Book not found" } }),
        )
        .start()
        .await;

    let err = server.client().get_book(99).await.unwrap_err();
    match err {
        BsError::Api { code, message } => {
            assert_eq!(code, 404);
            assert_eq!(message, "Book not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_failure_is_decode_error() {
    let server = MockServer::new()
        .route(Method::GET, "/api/shelves", 502, "<html>Bad Gateway</html>")
        .start()
        .await;

    let err = server.client().list_shelves(None).await.unwrap_err();
    assert!(matches!(err, BsError::Decode(_)));
}

#[tokio::test]
async fn test_json_body_and_content_type() {
    let server = MockServer::new()
        .json(Method::POST, "/api/books", 200, json!({ "id": 5, "name": "Handbook" }))
        .start()
        .await;

    let params = BookParams {
        name: "Handbook".into(),
        description: "Team handbook".into(),
        ..BookParams::default()
    };
    let book = server.client().create_book(&params).await.unwrap();
    assert_eq!(book.id, 5);

    let req = server.only_request();
    assert_eq!(req.header("content-type").as_deref(), Some("application/json"));
    assert_eq!(
        req.json(),
        json!({ "name": "Handbook", "description": "Team handbook" })
    );
}

#[tokio::test]
async fn test_missing_upload_fails_before_network() {
    let server = MockServer::new().start().await;

    let params = AttachmentParams {
        name: "x".into(),
        uploaded_to: 1,
        file: Some("/no/such/file.bin".into()),
        ..AttachmentParams::default()
    };
    let err = server.client().create_attachment(&params).await.unwrap_err();

    assert!(matches!(err, BsError::Io(_)));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::builder()
        .url(format!("http://{addr}"))
        .build()
        .unwrap();
    let err = client.list_books(None).await.unwrap_err();
    assert!(matches!(err, BsError::Http(_)));
}

type Parts = Arc<Mutex<Vec<(String, Option<String>, Vec<u8>)>>>;

async fn capture_parts(State(parts): State<Parts>, mut multipart: Multipart) -> Json<serde_json::Value> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.unwrap().to_vec();
        parts.lock().unwrap().push((name, file_name, data));
    }
    Json(json!({ "id": 11, "name": "Notes", "uploaded_to": 3 }))
}

#[tokio::test]
async fn test_multipart_upload_parts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "meeting notes").unwrap();

    let parts: Parts = Arc::default();
    let app = Router::new()
        .route("/api/attachments", post(capture_parts))
        .with_state(parts.clone());
    let base = common::serve(app).await;

    let client = ApiClient::builder().url(base).token("id", "secret").build().unwrap();
    let params = AttachmentParams {
        name: "Notes".into(),
        uploaded_to: 3,
        file: Some(path),
        ..AttachmentParams::default()
    };
    let created = client.create_attachment(&params).await.unwrap();
    assert_eq!(created.id, 11);

    let parts = parts.lock().unwrap().clone();
    let names: Vec<&str> = parts.iter().map(|(n, _, _)| n.as_str()).collect();
    assert_eq!(names, vec!["name", "uploaded_to", "file"]);
    assert_eq!(parts[1].2, b"3");
    assert_eq!(parts[2].1.as_deref(), Some("notes.txt"));
    assert_eq!(parts[2].2, b"meeting notes");
}
