//! # REST API Errors
//!
//! Error types for the client API.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::ClientId;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Identifier is zero, negative or not an integer
    #[error("Invalid client id: {0}")]
    InvalidId(String),

    /// Body identifier does not match the path identifier
    #[error("Client id mismatch: path {path}, body {body}")]
    IdMismatch { path: ClientId, body: i64 },

    /// Missing required parameter or field
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Search called with neither `name` nor `gender`
    #[error("Search requires at least one of: name, gender")]
    MissingFilter,

    /// No client with this identifier
    #[error("Client not found: {0}")]
    NotFound(ClientId),

    /// Search matched nothing
    #[error("No clients match the given filter")]
    NoMatches,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidId(_) => StatusCode::BAD_REQUEST,
            RestError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            RestError::MissingParam(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            RestError::MissingFilter => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::NoMatches => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Any 4xx: malformed input or an absent client
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::InvalidId(rejection.body_text())
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::InvalidQueryParam(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
