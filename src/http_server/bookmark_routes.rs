//! Bookmark HTTP Routes
//!
//! `/bookmarks` collection endpoints. Every `/{id}` route first passes
//! through [`resolve_bookmark`], so an unknown id is answered with 404
//! before the body is looked at.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};

use serde::de::DeserializeOwned;

use crate::bookmarks::{
    sanitize_bookmark, validate_for_create, validate_for_update, Bookmark, BookmarkError,
    BookmarkResponse, BookmarkResult, CreateBookmarkInput, UpdateBookmarkInput,
};
use crate::store::{BookmarkStore, StoreResult};

// ==================
// Shared State
// ==================

/// State shared across bookmark handlers
#[derive(Debug, Clone)]
pub struct BookmarkState {
    pub store: Arc<dyn BookmarkStore>,
}

impl BookmarkState {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    /// Run a store operation on the blocking pool
    pub async fn run<T, F>(&self, op: F) -> BookmarkResult<T>
    where
        F: FnOnce(&dyn BookmarkStore) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let outcome = tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| BookmarkError::StoreFailure(e.to_string()))?;
        Ok(outcome?)
    }
}

/// Bookmark looked up by [`resolve_bookmark`] for the current request
#[derive(Debug, Clone)]
pub struct ResolvedBookmark(pub Bookmark);

// ==================
// Bookmark Routes
// ==================

/// Create bookmark routes, to be nested under the collection path
pub fn bookmark_routes(state: Arc<BookmarkState>) -> Router {
    let item = Router::new()
        .route(
            "/{id}",
            get(get_bookmark_handler)
                .patch(update_bookmark_handler)
                .delete(delete_bookmark_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_bookmark,
        ));

    Router::new()
        .route("/", get(list_bookmarks_handler).post(create_bookmark_handler))
        .merge(item)
        .with_state(state)
}

/// Looks up `{id}` once and attaches it to the request.
///
/// Ids that are not integers cannot exist and get the same 404.
pub async fn resolve_bookmark(
    State(state): State<Arc<BookmarkState>>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> BookmarkResult<Response> {
    let id: i64 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!(id = %raw_id, "bookmark id is not numeric");
            return Err(BookmarkError::NotFound);
        }
    };

    match state.run(move |store| store.get_by_id(id)).await? {
        Some(bookmark) => {
            request.extensions_mut().insert(ResolvedBookmark(bookmark));
            Ok(next.run(request).await)
        }
        None => {
            tracing::warn!(id, "bookmark does not exist");
            Err(BookmarkError::NotFound)
        }
    }
}

// ==================
// Body Parsing
// ==================

/// Reads a JSON request body.
///
/// A body that is blank or not sent as JSON reads as `{}`, so validation
/// reports the missing fields. Only JSON that is present and malformed is
/// `InvalidBody`.
fn parse_body<T>(headers: &HeaderMap, body: &Bytes) -> BookmarkResult<T>
where
    T: DeserializeOwned + Default,
{
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| BookmarkError::InvalidBody(e.to_string()))
}

// ==================
// Collection Handlers
// ==================

async fn list_bookmarks_handler(
    State(state): State<Arc<BookmarkState>>,
) -> BookmarkResult<Json<Vec<BookmarkResponse>>> {
    let bookmarks = state.run(|store| store.get_all()).await?;
    Ok(Json(bookmarks.iter().map(sanitize_bookmark).collect()))
}

async fn create_bookmark_handler(
    State(state): State<Arc<BookmarkState>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> BookmarkResult<impl IntoResponse> {
    let input: CreateBookmarkInput = parse_body(&headers, &body)?;
    let new_bookmark = validate_for_create(input).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected bookmark create");
    })?;

    let bookmark = state.run(move |store| store.insert(new_bookmark)).await?;
    tracing::info!(id = bookmark.id, "bookmark created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(sanitize_bookmark(&bookmark)),
    ))
}

// ==================
// Item Handlers
// ==================

async fn get_bookmark_handler(
    Extension(ResolvedBookmark(bookmark)): Extension<ResolvedBookmark>,
) -> Json<BookmarkResponse> {
    Json(sanitize_bookmark(&bookmark))
}

async fn update_bookmark_handler(
    State(state): State<Arc<BookmarkState>>,
    Extension(ResolvedBookmark(bookmark)): Extension<ResolvedBookmark>,
    headers: HeaderMap,
    body: Bytes,
) -> BookmarkResult<StatusCode> {
    let input: UpdateBookmarkInput = parse_body(&headers, &body)?;
    let patch = validate_for_update(input).inspect_err(|e| {
        tracing::warn!(id = bookmark.id, error = %e, "rejected bookmark update");
    })?;

    let id = bookmark.id;
    let affected = state.run(move |store| store.update_fields(id, &patch)).await?;
    if affected == 0 {
        return Err(BookmarkError::NotFound);
    }

    tracing::info!(id, "bookmark updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_bookmark_handler(
    State(state): State<Arc<BookmarkState>>,
    Extension(ResolvedBookmark(bookmark)): Extension<ResolvedBookmark>,
) -> BookmarkResult<StatusCode> {
    let id = bookmark.id;
    let affected = state.run(move |store| store.delete_by_id(id)).await?;
    if affected == 0 {
        return Err(BookmarkError::NotFound);
    }

    tracing::info!(id, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}
