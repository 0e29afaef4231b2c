//! Metrics registry
//!
//! Counters only, monotonic, reset on process start. `clients` is the one
//! exception: it is overwritten with the store size after each mutation.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the client API
///
/// Relaxed ordering throughout; readers may see counters from slightly
/// different instants.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Requests answered with a success status
    requests_served: AtomicU64,
    /// Requests answered with an error status
    requests_rejected: AtomicU64,
    clients_created: AtomicU64,
    clients_updated: AtomicU64,
    clients_deleted: AtomicU64,
    /// Current store size
    clients: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests_served(&self) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_clients_created(&self) {
        self.clients_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts both full updates and enable/disable
    pub fn increment_clients_updated(&self) {
        self.clients_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_clients_deleted(&self) {
        self.clients_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_clients(&self, count: u64) {
        self.clients.store(count, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_served: self.requests_served.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            clients_created: self.clients_created.load(Ordering::Relaxed),
            clients_updated: self.clients_updated.load(Ordering::Relaxed),
            clients_deleted: self.clients_deleted.load(Ordering::Relaxed),
            clients: self.clients.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_served: u64,
    pub requests_rejected: u64,
    pub clients_created: u64,
    pub clients_updated: u64,
    pub clients_deleted: u64,
    pub clients: u64,
}
