//! Listener and CORS settings for the client API
//!
//! Read from the `server` section of the config file. Every field has a
//! default; [`HttpServerConfig::validate`] rejects values the listener or
//! the CORS layer could not use.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port the service listens on when none is configured
pub const DEFAULT_PORT: u16 = 5080;

/// Invalid `server` settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpConfigError {
    #[error("server.port must be > 0")]
    ZeroPort,

    #[error("server.host must not be empty")]
    BlankHost,

    #[error("server.cors_origins: invalid origin {0:?}")]
    InvalidOrigin(String),
}

/// Listener and CORS settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to bind (default: all interfaces)
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the API; empty allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Local front-end dev servers
fn default_cors_origins() -> Vec<String> {
    ["http://localhost:3000", "http://localhost:5173"]
        .iter()
        .map(|origin| origin.to_string())
        .collect()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Check the settings before anything is bound
    pub fn validate(&self) -> Result<(), HttpConfigError> {
        if self.port == 0 {
            return Err(HttpConfigError::ZeroPort);
        }
        if self.host.trim().is_empty() {
            return Err(HttpConfigError::BlankHost);
        }
        self.allowed_origins().map(|_| ())
    }

    /// `host:port` for the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured origins as header values. Each must be an
    /// `http://` or `https://` origin.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, HttpConfigError> {
        self.cors_origins
            .iter()
            .map(|origin| {
                let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");
                match HeaderValue::from_str(origin) {
                    Ok(value) if scheme_ok => Ok(value),
                    _ => Err(HttpConfigError::InvalidOrigin(origin.clone())),
                }
            })
            .collect()
    }
}
