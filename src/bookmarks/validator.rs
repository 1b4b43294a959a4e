//! Bookmark input validation
//!
//! Create checks fields in the order title, url, description, rating and
//! stops at the first failure. A text field counts as present unless it is
//! absent or null; the empty string is accepted.
//!
//! Update keeps only fields with a truthy value. `null`, `""`, `false` and
//! `0` are dropped from the patch rather than rejected.
//!
//! Text columns take any JSON value: strings are kept as-is, anything else
//! is stored as its JSON text (`7` becomes `"7"`).

use serde_json::Value;

use super::errors::{BookmarkError, BookmarkResult};
use super::model::{BookmarkPatch, CreateBookmarkInput, NewBookmark, UpdateBookmarkInput};

/// Lowest accepted rating
pub const MIN_RATING: i64 = 1;

/// Highest accepted rating
pub const MAX_RATING: i64 = 5;

/// Validates a create request body.
///
/// # Errors
///
/// - `MissingField` if a field is absent or null
/// - `InvalidRating` if the rating does not coerce to an integer in [1,5]
pub fn validate_for_create(input: CreateBookmarkInput) -> BookmarkResult<NewBookmark> {
    let title = required_text("title", input.title)?;
    let url = required_text("url", input.url)?;
    let description = required_text("description", input.description)?;
    let rating = input.rating.ok_or(BookmarkError::MissingField("rating"))?;
    let rating = coerce_rating(&rating)?;

    Ok(NewBookmark {
        title,
        url,
        description,
        rating,
    })
}

/// Validates a partial update body.
///
/// # Errors
///
/// - `EmptyUpdate` if nothing is left to apply
pub fn validate_for_update(input: UpdateBookmarkInput) -> BookmarkResult<BookmarkPatch> {
    let patch = BookmarkPatch {
        title: optional_text(input.title),
        url: optional_text(input.url),
        description: optional_text(input.description),
    };

    if patch.is_empty() {
        return Err(BookmarkError::EmptyUpdate);
    }
    Ok(patch)
}

/// Coerces a rating value to an integer in [1,5].
///
/// Integral numbers and strings holding a base-10 integer are accepted.
/// Strings with trailing junk or a fraction (`"3abc"`, `"3.5"`) are
/// rejected rather than truncated to their leading digits.
pub fn coerce_rating(value: &Value) -> BookmarkResult<i64> {
    let rating = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64),
        },
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match rating {
        Some(r) if (MIN_RATING..=MAX_RATING).contains(&r) => Ok(r),
        _ => {
            tracing::error!(rating = %value, "invalid rating supplied");
            Err(BookmarkError::InvalidRating)
        }
    }
}

fn required_text(field: &'static str, value: Option<Value>) -> BookmarkResult<String> {
    value.map(into_text).ok_or(BookmarkError::MissingField(field))
}

fn optional_text(value: Option<Value>) -> Option<String> {
    value.filter(is_truthy).map(into_text)
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
