//! Observability for the client registry
//!
//! - Structured logging (JSON lines)
//! - Operational counters
//!
//! Observability is read-only: nothing here feeds back into request
//! handling, and a failed log write is ignored.
//!
//! # Usage
//!
//! ```ignore
//! use client_registry::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::ClientCreated, &[("id", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_clients_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event; fatal events go to stderr
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::fatal(event.as_str(), fields);
    } else {
        Logger::info(event.as_str(), fields);
    }
}

fn with_reason<'a>(reason: &'a str, fields: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut all = Vec::with_capacity(fields.len() + 1);
    all.push(("reason", reason));
    all.extend_from_slice(fields);
    all
}

/// Log a request rejected for bad input or a missing client, at WARN
pub fn log_rejection(reason: &str, fields: &[(&str, &str)]) {
    Logger::warn(Event::RequestRejected.as_str(), &with_reason(reason, fields));
}

/// Log a request that failed on the server side, at ERROR
pub fn log_failure(reason: &str, fields: &[(&str, &str)]) {
    Logger::error(Event::RequestFailed.as_str(), &with_reason(reason, fields));
}
