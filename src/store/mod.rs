//! # Bookmark Store
//!
//! Persistence capability consumed by the HTTP layer. Handlers only see
//! `Arc<dyn BookmarkStore>`; there is no module-level store.
//!
//! Two implementations:
//! - [`SqliteBookmarkStore`]: the `bookmarks` table in a SQLite database
//! - [`MemoryBookmarkStore`]: a `BTreeMap`, for tests and throwaway runs
//!
//! Identifiers are assigned by the store and never reused after deletion.

mod errors;
mod memory;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryBookmarkStore;
pub use sqlite::SqliteBookmarkStore;

use crate::bookmarks::{Bookmark, BookmarkPatch, NewBookmark};

/// CRUD primitives keyed by bookmark id
pub trait BookmarkStore: Send + Sync + std::fmt::Debug {
    /// All bookmarks, ordered by id
    fn get_all(&self) -> StoreResult<Vec<Bookmark>>;

    /// Bookmark with `id`, if any
    fn get_by_id(&self, id: i64) -> StoreResult<Option<Bookmark>>;

    /// Persist a bookmark and return it with its assigned id
    fn insert(&self, bookmark: NewBookmark) -> StoreResult<Bookmark>;

    /// Apply the non-empty columns of `patch`. Returns the affected row count.
    fn update_fields(&self, id: i64, patch: &BookmarkPatch) -> StoreResult<usize>;

    /// Remove the bookmark. Returns the affected row count.
    fn delete_by_id(&self, id: i64) -> StoreResult<usize>;
}
