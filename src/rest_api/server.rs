//! # REST API HTTP Routes
//!
//! Axum routes for the client resource, all under [`CLIENT_PREFIX`].
//!
//! ```text
//! GET    /            list all (204 when empty)
//! GET    /search      ?name=&gender=
//! GET    /:id
//! POST   /            create
//! PUT    /:id         full update
//! PATCH  /:id         ?enabled=
//! DELETE /:id
//! ```
//!
//! The collection is served both with and without a trailing slash.
//! Every extractor rejection is turned into a [`RestError`], so malformed
//! requests get the same JSON error body as validation failures.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::observability::{log_failure, log_rejection, MetricsRegistry};
use crate::store::ClientId;

use super::errors::{RestError, RestResult};
use super::handler::ClientHandler;
use super::parser::{parse_client_id, parse_enabled, SearchCriteria};
use super::request::{CreateClient, UpdateClient};
use super::response::{ClientView, IdResponse};

/// Path prefix of the client resource
pub const CLIENT_PREFIX: &str = "/api/v1/client";

/// REST API server state
pub struct RestServer<H: ClientHandler> {
    handler: Arc<H>,
    metrics: Arc<MetricsRegistry>,
}

type ClientPath = Result<Path<String>, PathRejection>;
type ClientQuery = Result<Query<HashMap<String, String>>, QueryRejection>;

impl<H: ClientHandler + 'static> RestServer<H> {
    pub fn new(handler: Arc<H>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { handler, metrics }
    }

    /// Build the client router with absolute paths under [`CLIENT_PREFIX`]
    pub fn router(self) -> Router {
        let state = Arc::new(self);
        let collection = get(list_handler::<H>).post(create_handler::<H>);

        Router::new()
            .route(CLIENT_PREFIX, collection.clone())
            .route(&format!("{}/", CLIENT_PREFIX), collection)
            .route(&format!("{}/search", CLIENT_PREFIX), get(search_handler::<H>))
            .route(
                &format!("{}/:id", CLIENT_PREFIX),
                get(get_handler::<H>)
                    .put(update_handler::<H>)
                    .patch(enable_handler::<H>)
                    .delete(delete_handler::<H>),
            )
            .with_state(state)
    }

    /// Count the outcome; log 4xx at WARN and 5xx at ERROR
    fn observe<T>(&self, route: &str, result: RestResult<T>) -> RestResult<T> {
        match &result {
            Ok(_) => self.metrics.increment_requests_served(),
            Err(err) => {
                self.metrics.increment_requests_rejected();
                let reason = err.to_string();
                let status = err.status_code();
                let fields = [("route", route), ("status", status.as_str())];
                if err.is_client_error() {
                    log_rejection(&reason, &fields);
                } else {
                    log_failure(&reason, &fields);
                }
            }
        }
        result
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

fn client_id(path: ClientPath) -> RestResult<ClientId> {
    let Path(raw) = path?;
    parse_client_id(&raw)
}

fn query_map(query: ClientQuery) -> RestResult<HashMap<String, String>> {
    let Query(map) = query?;
    Ok(map)
}

/// List all clients
async fn list_handler<H: ClientHandler + 'static>(
    State(server): State<ServerState<H>>,
) -> Result<Response, RestError> {
    let views = server.observe("GET /", server.handler.list())?;
    if views.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(views).into_response())
}

/// Get single client handler
async fn get_handler<H: ClientHandler + 'static>(
    State(server): State<ServerState<H>>,
    path: ClientPath,
) -> Result<Json<ClientView>, RestError> {
    let result = client_id(path).and_then(|id| server.handler.get(id));
    server.observe("GET /:id", result).map(Json)
}

/// Filtered search handler
async fn search_handler<H: ClientHandler + 'static>(
    State(server): State<ServerState<H>>,
    query: ClientQuery,
) -> Result<Json<Vec<ClientView>>, RestError> {
    let result = query_map(query)
        .and_then(|query| SearchCriteria::parse(&query))
        .and_then(|criteria| server.handler.search(&criteria));
    server.observe("GET /search", result).map(Json)
}

/// Create client handler
async fn create_handler<H: ClientHandler + 'static>(
    State(server): State<ServerState<H>>,
    payload: Result<Json<CreateClient>, JsonRejection>,
) -> Result<(StatusCode, Json<IdResponse>), RestError> {
    let result = payload
        .map_err(RestError::from)
        .and_then(|Json(body)| server.handler.create(&body));
    let id = server.observe("POST /", result)?;
    Ok((StatusCode::CREATED, Json(IdResponse::new(id))))
}

/// Full update handler
async fn update_handler<H: ClientHandler + 'static>(
    State(server): State<ServerState<H>>,
    path: ClientPath,
    payload: Result<Json<UpdateClient>, JsonRejection>,
) -> Result<Json<IdResponse>, RestError> {
    let result = client_id(path).and_then(|id| {
        let Json(body) = payload?;
        server.handler.update(id, &body)
    });
    let id = server.observe("PUT /:id", result)?;
    Ok(Json(IdResponse::new(id)))
}

/// Enable/disable handler
async fn enable_handler<H: ClientHandler + 'static>(
    State(server): State<ServerState<H>>,
    path: ClientPath,
    query: ClientQuery,
) -> Result<Json<IdResponse>, RestError> {
    let result = client_id(path).and_then(|id| {
        let enabled = parse_enabled(&query_map(query)?)?;
        server.handler.set_enabled(id, enabled)
    });
    let id = server.observe("PATCH /:id", result)?;
    Ok(Json(IdResponse::new(id)))
}

/// Delete client handler
async fn delete_handler<H: ClientHandler + 'static>(
    State(server): State<ServerState<H>>,
    path: ClientPath,
) -> Result<StatusCode, RestError> {
    let result = client_id(path).and_then(|id| server.handler.delete(id));
    server.observe("DELETE /:id", result)?;
    Ok(StatusCode::NO_CONTENT)
}
