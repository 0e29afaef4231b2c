//! # Client REST API
//!
//! HTTP endpoints for the client resource: listing, lookup, filtered
//! search and the create/update/enable/delete lifecycle.

pub mod errors;
pub mod filter;
pub mod handler;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult};
pub use filter::{ClientFilter, FilterSet};
pub use handler::{ClientHandler, InMemoryClientHandler};
pub use parser::SearchCriteria;
pub use request::{CreateClient, UpdateClient};
pub use resolver::{ClientFilters, Snapshot};
pub use response::{ClientView, IdResponse};
pub use server::{RestServer, CLIENT_PREFIX};
