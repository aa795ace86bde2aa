//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! The store is created by the caller and passed in; the server owns no
//! data of its own.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::MetricsRegistry;
use crate::storage::Storage;

use super::catalog_routes::catalog_routes;
use super::config::HttpServerConfig;
use super::inquiry_routes::inquiry_routes;
use super::observability_routes::observability_routes;
use super::state::AppState;

/// HTTP Server for the course catalog and inquiry API
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store
    pub fn new(config: HttpServerConfig, store: Arc<dyn Storage>) -> Self {
        let state = AppState::new(store);
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: AppState) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: allow any
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
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

        let api = Router::new()
            .merge(catalog_routes(state.clone()))
            .merge(inquiry_routes(state.clone(), config.admin_endpoints));

        Router::new()
            // Health and metrics at root level
            .merge(observability_routes(state))
            .nest("/api", api)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Counters shared with the handlers
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.state.metrics)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        if self.config.admin_endpoints {
            tracing::warn!(
                "admin endpoints /api/contacts and /api/enrollments are mounted without authentication"
            );
        }

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "techedu HTTP server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("techedu HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> Arc<dyn Storage> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), store());
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(HttpServerConfig::with_port(8080), store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_without_admin_endpoints() {
        let config = HttpServerConfig {
            admin_endpoints: false,
            cors_origins: Vec::new(),
            ..Default::default()
        };
        let server = HttpServer::new(config, store());
        assert_eq!(server.metrics().snapshot().catalog_reads, 0);
        let _router = server.router();
    }
}
