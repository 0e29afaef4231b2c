//! # HTTP Server
//!
//! Combines the client API with the health and metrics routes and serves
//! them until ctrl-c.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::rest_api::{InMemoryClientHandler, RestServer, CLIENT_PREFIX};
use crate::store::ClientStore;

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes, ObservabilityState};

/// HTTP server for the client registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server owning `store` for the life of the process
    pub fn new(config: HttpServerConfig, store: ClientStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: ClientStore) -> Router {
        let metrics = Arc::new(MetricsRegistry::new());
        let handler = Arc::new(InMemoryClientHandler::with_metrics(
            store,
            Arc::clone(&metrics),
        ));
        let observability_state = Arc::new(ObservabilityState::new(Arc::clone(&metrics)));

        Router::new()
            .merge(health_routes(Arc::clone(&observability_state)))
            .nest("/observability", observability_routes(observability_state))
            .merge(RestServer::new(handler, metrics).router())
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        // An unvalidated config with a bad origin allows no cross-origin calls
        let origins = config.allowed_origins().unwrap_or_default();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        log_event_with_fields(
            Event::Serving,
            &[("addr", addr.as_str()), ("prefix", CLIENT_PREFIX)],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
