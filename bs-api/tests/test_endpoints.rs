//! Endpoint wiring: paths, methods and decoding.

mod common;

use reqwest::Method;
use serde_json::json;

use bs_api::{ExportFormat, PageParams, SearchParams, UserDeleteParams};
use bs_core::BsError;
use bs_models::{ContentType, Deletable, DeletableType};
use common::MockServer;

#[tokio::test]
async fn test_list_books_decodes_records() {
    let server = MockServer::new()
        .json(
            Method::GET,
            "/api/books",
            200,
            json!({
                "data": [
                    { "id": 1, "name": "Handbook", "slug": "handbook",
                      "created_at": "2023-04-01T10:00:00.000000Z" },
                    { "id": 2, "name": "Runbooks", "slug": "runbooks" }
                ],
                "total": 2
            }),
        )
        .start()
        .await;

    let books = server.client().list_books(None).await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].slug, "handbook");
    assert!(books[0].created_at.is_some());
    assert_eq!(books[1].id, 2);
}

#[tokio::test]
async fn test_get_book_detailed() {
    let server = MockServer::new()
        .json(
            Method::GET,
            "/api/books/1",
            200,
            json!({
                "id": 1,
                "name": "Handbook",
                "created_by": { "id": 3, "name": "Admin" },
                "tags": [{ "id": 9, "name": "team", "value": "ops", "order": 0 }]
            }),
        )
        .start()
        .await;

    let book = server.client().get_book(1).await.unwrap();
    assert_eq!(book.created_by.name, "Admin");
    assert_eq!(book.tags[0].value, "ops");
    assert!(book.cover.is_none());
}

#[tokio::test]
async fn test_update_page_sends_put() {
    let server = MockServer::new()
        .json(Method::PUT, "/api/pages/4", 200, json!({ "id": 4, "name": "Renamed" }))
        .start()
        .await;

    let params = PageParams {
        name: "Renamed".into(),
        ..PageParams::default()
    };
    let page = server.client().update_page(4, &params).await.unwrap();
    assert_eq!(page.name, "Renamed");

    let req = server.only_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.json(), json!({ "name": "Renamed" }));
}

#[tokio::test]
async fn test_export_returns_raw_bytes() {
    let server = MockServer::new()
        .route(Method::GET, "/api/chapters/7/export/markdown", 200, "# Chapter 7\n")
        .start()
        .await;

    let bytes = server
        .client()
        .export_chapter(7, ExportFormat::Markdown)
        .await
        .unwrap();
    assert_eq!(bytes, b"# Chapter 7\n");
}

#[tokio::test]
async fn test_search_query_on_wire() {
    let server = MockServer::new()
        .json(
            Method::GET,
            "/api/search",
            200,
            json!({
                "data": [{ "id": 3, "name": "Deploy", "type": "page",
                           "preview_html": { "name": "<strong>Deploy</strong>" } }],
                "total": 12
            }),
        )
        .start()
        .await;

    let params = SearchParams {
        in_name: Some("deploy".into()),
        types: vec![ContentType::Page],
        count: Some(1),
        ..SearchParams::default()
    };
    let list = server.client().search_with_total(&params).await.unwrap();
    assert_eq!(list.total, 12);
    assert_eq!(list.data[0].content_type, ContentType::Page);
    assert_eq!(list.data[0].preview_html.name, "<strong>Deploy</strong>");

    let req = server.only_request();
    let (_, query) = req.uri.split_once('?').unwrap();
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("count".to_string(), "1".to_string()),
            ("query".to_string(), "{in_name:deploy} {type:page}".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_recycle_bin_roundtrip() {
    let server = MockServer::new()
        .json(
            Method::GET,
            "/api/recycle-bin",
            200,
            json!({
                "data": [{
                    "id": 1,
                    "deleted_by": 2,
                    "deletable_type": "bookshelf",
                    "deletable_id": 8,
                    "deletable": { "id": 8, "name": "Archive", "slug": "archive" }
                }],
                "total": 1
            }),
        )
        .json(Method::PUT, "/api/recycle-bin/1", 200, json!({ "restore_count": 3 }))
        .json(Method::DELETE, "/api/recycle-bin/1", 200, json!({ "delete_count": 2 }))
        .start()
        .await;
    let client = server.client();

    let items = client.list_recycle_bin_items().await.unwrap();
    assert_eq!(items[0].deletable_type, DeletableType::Shelf);
    match items[0].deletable() {
        Some(Deletable::Shelf(shelf)) => assert_eq!(shelf.name, "Archive"),
        other => panic!("expected shelf, got {other:?}"),
    }

    assert_eq!(client.restore_recycle_bin_item(1).await.unwrap(), 3);
    assert_eq!(client.delete_recycle_bin_item(1).await.unwrap(), 2);
}

#[tokio::test]
async fn test_recycle_bin_missing_count_is_zero() {
    let server = MockServer::new()
        .json(Method::PUT, "/api/recycle-bin/1", 200, json!({ "restored": true }))
        .json(Method::DELETE, "/api/recycle-bin/1", 200, json!({}))
        .start()
        .await;
    let client = server.client();

    assert_eq!(client.restore_recycle_bin_item(1).await.unwrap(), 0);
    assert_eq!(client.delete_recycle_bin_item(1).await.unwrap(), 0);
}

#[tokio::test]
async fn test_recycle_bin_non_json_count_is_decode_error() {
    let server = MockServer::new()
        .route(Method::PUT, "/api/recycle-bin/1", 200, "ok")
        .start()
        .await;

    let err = server.client().restore_recycle_bin_item(1).await.unwrap_err();
    assert!(matches!(err, BsError::Decode(_)));
}

#[tokio::test]
async fn test_delete_user_body() {
    let server = MockServer::new()
        .route(Method::DELETE, "/api/users/5", 204, "")
        .route(Method::DELETE, "/api/users/6", 204, "")
        .start()
        .await;
    let client = server.client();

    assert!(client.delete_user(5, None).await.unwrap());
    let params = UserDeleteParams { migrate_ownership_id: 1 };
    assert!(client.delete_user(6, Some(params)).await.unwrap());

    let requests = server.requests();
    assert_eq!(requests[0].body_text(), "{}");
    assert_eq!(requests[1].json(), json!({ "migrate_ownership_id": 1 }));
}

#[tokio::test]
async fn test_malformed_single_resource_yields_default() {
    let server = MockServer::new()
        .route(Method::GET, "/api/users/1", 200, "not json")
        .start()
        .await;

    let user = server.client().get_user(1).await.unwrap();
    assert_eq!(user.id, 0);
    assert!(user.name.is_empty());
}
