//! # HTTP Server Module
//!
//! Axum server exposing the bookmark collection.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `<prefix>/bookmarks` - List and create bookmarks
//! - `<prefix>/bookmarks/{id}` - Read, update and delete one bookmark

pub mod bookmark_routes;
pub mod config;
pub mod health_routes;
pub mod server;

pub use bookmark_routes::{bookmark_routes, BookmarkState, ResolvedBookmark};
pub use config::{ConfigError, ServerConfig};
pub use server::HttpServer;
