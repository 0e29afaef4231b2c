//! Observable events of the client registry
//!
//! Every log line carries exactly one of these events.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// Startup failed (FATAL)
    BootFailed,
    /// Configuration loaded
    ConfigLoaded,
    /// Store populated with sample records
    StoreSeeded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Client lifecycle
    /// Client created
    ClientCreated,
    /// Client fields overwritten
    ClientUpdated,
    /// Client enabled flag changed
    ClientEnabledChanged,
    /// Client removed
    ClientDeleted,

    // Requests
    /// Request rejected before reaching the store
    RequestRejected,
    /// Request failed on the server side
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "STARTUP_BEGIN",
            Event::BootFailed => "STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::ClientCreated => "CLIENT_CREATED",
            Event::ClientUpdated => "CLIENT_UPDATED",
            Event::ClientEnabledChanged => "CLIENT_ENABLED_CHANGED",
            Event::ClientDeleted => "CLIENT_DELETED",

            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_boot_failure_is_fatal() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::ClientDeleted.is_fatal());
        assert!(!Event::RequestRejected.is_fatal());
        assert!(!Event::RequestFailed.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(Event::ClientCreated.to_string(), "CLIENT_CREATED");
    }
}
