//! Bookmark shapes
//!
//! Raw input, validated input, persisted entity and sanitized output are
//! kept as separate types. Conversions between them go through the
//! validator and sanitizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::sanitizer::sanitize_text;

/// Persisted bookmark, as owned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

/// Raw body of a create request.
///
/// Absent and `null` both deserialize to `None`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookmarkInput {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
}

/// Raw body of a partial update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookmarkInput {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

/// Validated create payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

/// Validated partial update. `None` columns stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.description.is_none()
    }

    /// Returns a copy of `bookmark` with the patch applied
    pub fn apply_to(&self, bookmark: &Bookmark) -> Bookmark {
        Bookmark {
            id: bookmark.id,
            title: self.title.clone().unwrap_or_else(|| bookmark.title.clone()),
            url: self.url.clone().unwrap_or_else(|| bookmark.url.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| bookmark.description.clone()),
            rating: bookmark.rating,
        }
    }
}

/// Bookmark as returned to clients, free text escaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: sanitize_text(&bookmark.title),
            url: bookmark.url.clone(),
            description: sanitize_text(&bookmark.description),
            rating: bookmark.rating,
        }
    }
}
