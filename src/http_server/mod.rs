//! # HTTP Server Module
//!
//! Combines all endpoint routers into one Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/v1/client/*` - Client records
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{HttpConfigError, HttpServerConfig, DEFAULT_PORT};
pub use server::HttpServer;
