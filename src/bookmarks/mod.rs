//! # Bookmarks
//!
//! The bookmark resource: data shapes, input validation, output
//! sanitization and the error taxonomy shared with the HTTP layer.
//!
//! Write path: `CreateBookmarkInput` -> [`validate_for_create`] -> `NewBookmark` -> store.
//! Read path: store -> `Bookmark` -> [`sanitize_bookmark`] -> `BookmarkResponse`.

pub mod errors;
pub mod model;
pub mod sanitizer;
pub mod validator;

pub use errors::{BookmarkError, BookmarkResult, ErrorResponse};
pub use model::{
    Bookmark, BookmarkPatch, BookmarkResponse, CreateBookmarkInput, NewBookmark,
    UpdateBookmarkInput,
};
pub use sanitizer::{sanitize_bookmark, sanitize_text};
pub use validator::{validate_for_create, validate_for_update, MAX_RATING, MIN_RATING};
