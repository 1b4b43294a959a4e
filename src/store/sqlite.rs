//! SQLite-backed bookmark store.
//!
//! Wraps a single `rusqlite::Connection` behind a mutex. The `bookmarks`
//! table is created on open if it does not exist yet.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::ToSql;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::errors::{StoreError, StoreResult};
use super::BookmarkStore;
use crate::bookmarks::{Bookmark, BookmarkPatch, NewBookmark};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS bookmarks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        url TEXT NOT NULL,
        description TEXT NOT NULL,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5)
    );
";

/// Bookmark store over a SQLite table
#[derive(Debug)]
pub struct SqliteBookmarkStore {
    conn: Mutex<Connection>,
}

impl SqliteBookmarkStore {
    /// Opens (or creates) the database file at `path`.
    ///
    /// # Errors
    /// Returns `StoreError::Database` if the file cannot be opened or the
    /// table cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database. Discarded on drop.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(CREATE_TABLE)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn row_to_bookmark(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    Ok(Bookmark {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        description: row.get(3)?,
        rating: row.get(4)?,
    })
}

impl BookmarkStore for SqliteBookmarkStore {
    fn get_all(&self) -> StoreResult<Vec<Bookmark>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, title, url, description, rating FROM bookmarks ORDER BY id")?;
        let rows = stmt.query_map([], row_to_bookmark)?;
        let bookmarks = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(bookmarks)
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Option<Bookmark>> {
        let conn = self.conn()?;
        let bookmark = conn
            .query_row(
                "SELECT id, title, url, description, rating FROM bookmarks WHERE id = ?1",
                [id],
                row_to_bookmark,
            )
            .optional()?;
        Ok(bookmark)
    }

    fn insert(&self, bookmark: NewBookmark) -> StoreResult<Bookmark> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO bookmarks (title, url, description, rating) VALUES (?1, ?2, ?3, ?4)",
            params![bookmark.title, bookmark.url, bookmark.description, bookmark.rating],
        )?;
        Ok(Bookmark {
            id: conn.last_insert_rowid(),
            title: bookmark.title,
            url: bookmark.url,
            description: bookmark.description,
            rating: bookmark.rating,
        })
    }

    fn update_fields(&self, id: i64, patch: &BookmarkPatch) -> StoreResult<usize> {
        let mut assignments = Vec::with_capacity(3);
        let mut values: Vec<&dyn ToSql> = Vec::with_capacity(4);
        for (column, value) in [
            ("title", &patch.title),
            ("url", &patch.url),
            ("description", &patch.description),
        ] {
            if let Some(value) = value {
                values.push(value);
                assignments.push(format!("{} = ?{}", column, values.len()));
            }
        }
        if assignments.is_empty() {
            return Ok(0);
        }

        values.push(&id);
        let sql = format!(
            "UPDATE bookmarks SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );
        let conn = self.conn()?;
        Ok(conn.execute(&sql, values.as_slice())?)
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<usize> {
        let conn = self.conn()?;
        Ok(conn.execute("DELETE FROM bookmarks WHERE id = ?1", [id])?)
    }
}
