//! # HTTP Server
//!
//! Builds the router around a store and serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::bookmark_routes::{bookmark_routes, BookmarkState};
use super::config::ServerConfig;
use super::health_routes::health_routes;
use crate::store::BookmarkStore;

/// HTTP server for the bookmark service
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with the given configuration
    pub fn new(config: ServerConfig, store: Arc<dyn BookmarkStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    pub fn build_router(config: &ServerConfig, store: Arc<dyn BookmarkStore>) -> Router {
        let state = Arc::new(BookmarkState::new(store));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let collection = format!("{}/bookmarks", config.normalized_prefix());

        Router::new()
            .merge(health_routes(state.clone()))
            .nest(&collection, bookmark_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            %addr,
            collection = %format!("{}/bookmarks", self.config.normalized_prefix()),
            "bookmark server listening"
        );
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBookmarkStore;

    fn memory_store() -> Arc<dyn BookmarkStore> {
        Arc::new(MemoryBookmarkStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(ServerConfig::default(), memory_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(ServerConfig::with_port(8080), memory_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_without_prefix() {
        let mut config = ServerConfig::default();
        config.api_prefix = String::new();
        config.cors_origins.clear();
        let _router = HttpServer::new(config, memory_store()).router();
    }
}
