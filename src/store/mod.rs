//! # Client Record Store
//!
//! Holds the authoritative in-memory collection of client records.
//! One store is built per process and handed to the request layer;
//! nothing here is global.

mod client_store;
mod record;
pub mod seed;

pub use client_store::ClientStore;
pub use record::{ClientId, ClientRecord, Gender};
pub use seed::SeedConfig;
