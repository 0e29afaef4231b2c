//! client_registry - an in-memory client records service
//!
//! A single HTTP resource under `/api/v1/client` backed by a
//! process-lifetime store, with lookup, filtered search and a
//! create/update/enable/delete lifecycle.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;
