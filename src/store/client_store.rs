//! In-memory client store
//!
//! Records are kept in insertion order. The store does not re-check
//! identifier uniqueness on `add`; uniqueness comes from `next_id`.
//!
//! # Identifier policy
//!
//! The next identifier is one past the larger of the highest identifier
//! currently stored and the highest identifier ever assigned. An empty,
//! never-used store starts at 1. Identifiers of deleted records are never
//! handed out again.

use super::record::{ClientId, ClientRecord};

/// Authoritative collection of client records
#[derive(Debug, Default, Clone)]
pub struct ClientStore {
    records: Vec<ClientRecord>,
    /// Highest identifier this store has ever held
    high_water: ClientId,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given records, in order.
    pub fn with_records(records: Vec<ClientRecord>) -> Self {
        let high_water = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            records,
            high_water,
        }
    }

    /// Exact-match lookup on identifier
    pub fn get_by_id(&self, id: ClientId) -> Option<&ClientRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a record
    pub fn add(&mut self, record: ClientRecord) {
        self.high_water = self.high_water.max(record.id);
        self.records.push(record);
    }

    /// Replace the record sharing `record.id`.
    ///
    /// No-op when the identifier is absent; returns whether a record was
    /// replaced.
    pub fn update(&mut self, record: ClientRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given identifier. No-op when absent.
    pub fn remove(&mut self, id: ClientId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Read-only snapshot of all records in insertion order
    pub fn data(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier the next created record should receive
    pub fn next_id(&self) -> ClientId {
        let max_existing = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        max_existing.max(self.high_water) + 1
    }
}
