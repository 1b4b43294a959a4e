//! bookmarkd - HTTP service for managing bookmarks
//!
//! A single `bookmarks` collection with create, list, get, partial update
//! and delete. Input is validated on the way in; free text is escaped on
//! the way out.

pub mod bookmarks;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
