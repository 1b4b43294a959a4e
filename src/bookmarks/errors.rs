//! # Bookmark Errors
//!
//! Error taxonomy for the bookmark resource and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for bookmark operations
pub type BookmarkResult<T> = Result<T, BookmarkError>;

/// Bookmark resource errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookmarkError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required field absent or null
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    /// Rating not an integer in [1,5]
    #[error("'rating' must be a number between 1 and 5")]
    InvalidRating,

    /// Update body had nothing to apply
    #[error("Request body must contain either 'title', 'url' or 'description'")]
    EmptyUpdate,

    /// Body could not be parsed as JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Identifier does not resolve
    #[error("Bookmark doesn't exist")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Persistence failure; the detail is logged, never sent
    #[error("Internal server error")]
    StoreFailure(String),
}

impl BookmarkError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookmarkError::MissingField(_)
            | BookmarkError::InvalidRating
            | BookmarkError::EmptyUpdate
            | BookmarkError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            BookmarkError::NotFound => StatusCode::NOT_FOUND,
            BookmarkError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for BookmarkError {
    fn from(err: StoreError) -> Self {
        BookmarkError::StoreFailure(err.to_string())
    }
}

/// Error response body: `{"error": {"message": ...}}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl From<&BookmarkError> for ErrorResponse {
    fn from(err: &BookmarkError) -> Self {
        Self {
            error: ErrorMessage {
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        if let BookmarkError::StoreFailure(detail) = &self {
            tracing::error!(error = %detail, "bookmark store failure");
        }
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BookmarkError::MissingField("title").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(BookmarkError::InvalidRating.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BookmarkError::EmptyUpdate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BookmarkError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BookmarkError::StoreFailure("disk".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            BookmarkError::MissingField("url").to_string(),
            "Missing 'url' in request body"
        );
        assert_eq!(
            BookmarkError::EmptyUpdate.to_string(),
            "Request body must contain either 'title', 'url' or 'description'"
        );
        assert_eq!(BookmarkError::NotFound.to_string(), "Bookmark doesn't exist");
    }

    #[test]
    fn test_store_failure_hides_detail() {
        let err = BookmarkError::from(StoreError::Database("no such table".to_string()));
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["error"]["message"], "Internal server error");
    }
}
