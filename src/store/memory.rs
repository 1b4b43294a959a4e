//! In-memory bookmark store

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::errors::{StoreError, StoreResult};
use super::BookmarkStore;
use crate::bookmarks::{Bookmark, BookmarkPatch, NewBookmark};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i64, Bookmark>,
    last_id: i64,
}

/// Bookmark store held in process memory
#[derive(Debug, Default)]
pub struct MemoryBookmarkStore {
    inner: Mutex<Inner>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl BookmarkStore for MemoryBookmarkStore {
    fn get_all(&self) -> StoreResult<Vec<Bookmark>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Option<Bookmark>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    fn insert(&self, bookmark: NewBookmark) -> StoreResult<Bookmark> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let stored = Bookmark {
            id: inner.last_id,
            title: bookmark.title,
            url: bookmark.url,
            description: bookmark.description,
            rating: bookmark.rating,
        };
        inner.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn update_fields(&self, id: i64, patch: &BookmarkPatch) -> StoreResult<usize> {
        if patch.is_empty() {
            return Ok(0);
        }
        let mut inner = self.lock()?;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = patch.apply_to(row);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<usize> {
        Ok(self.lock()?.rows.remove(&id).map_or(0, |_| 1))
    }
}
