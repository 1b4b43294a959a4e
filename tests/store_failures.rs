//! Store Failure Tests
//!
//! Every route against a store whose calls all fail:
//! - bookmark routes answer 500 with a fixed message
//! - the underlying error text never reaches the client
//! - health reports 503

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bookmarkd::bookmarks::{Bookmark, BookmarkPatch, NewBookmark};
use bookmarkd::http_server::{HttpServer, ServerConfig};
use bookmarkd::store::{BookmarkStore, StoreError, StoreResult};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

const FAILURE_DETAIL: &str = "disk I/O error";

/// Store whose every call fails
#[derive(Debug)]
struct BrokenStore;

impl BrokenStore {
    fn fail<T>() -> StoreResult<T> {
        Err(StoreError::Database(FAILURE_DETAIL.to_string()))
    }
}

impl BookmarkStore for BrokenStore {
    fn get_all(&self) -> StoreResult<Vec<Bookmark>> {
        Self::fail()
    }

    fn get_by_id(&self, _id: i64) -> StoreResult<Option<Bookmark>> {
        Self::fail()
    }

    fn insert(&self, _bookmark: NewBookmark) -> StoreResult<Bookmark> {
        Self::fail()
    }

    fn update_fields(&self, _id: i64, _patch: &BookmarkPatch) -> StoreResult<usize> {
        Self::fail()
    }

    fn delete_by_id(&self, _id: i64) -> StoreResult<usize> {
        Self::fail()
    }
}

fn broken_app() -> Router {
    HttpServer::build_router(&ServerConfig::default(), Arc::new(BrokenStore))
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_bookmark() -> Value {
    json!({ "title": "t", "url": "u", "description": "d", "rating": 3 })
}

// =============================================================================
// Bookmark Routes
// =============================================================================

#[rstest]
#[case(Method::GET, "/api/bookmarks", None)]
#[case(Method::POST, "/api/bookmarks", Some(valid_bookmark()))]
#[case(Method::GET, "/api/bookmarks/1", None)]
#[case(Method::PATCH, "/api/bookmarks/1", Some(json!({ "title": "x" })))]
#[case(Method::DELETE, "/api/bookmarks/1", None)]
#[tokio::test]
async fn test_store_failure_is_500(
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) {
    let (status, body) = send(broken_app(), method, uri, body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": { "message": "Internal server error" } }));
    assert!(!body.to_string().contains(FAILURE_DETAIL));
}

/// Validation runs before the store is touched.
#[tokio::test]
async fn test_invalid_create_is_400_with_broken_store() {
    let (status, body) = send(
        broken_app(),
        Method::POST,
        "/api/bookmarks",
        Some(json!({ "url": "u" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": { "message": "Missing 'title' in request body" } })
    );
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_unavailable() {
    let (status, body) = send(broken_app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}
