//! # Client Filters
//!
//! Predicates over client records, combined with AND logic.

use crate::store::{ClientRecord, Gender};

/// A single predicate on a client record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientFilter {
    /// Name contains the given substring (case-sensitive)
    NameContains(String),

    /// Gender equals the given value
    GenderIs(Gender),
}

impl ClientFilter {
    /// Create a name substring filter
    pub fn name_contains(part: impl Into<String>) -> Self {
        ClientFilter::NameContains(part.into())
    }

    /// Create a gender equality filter
    pub fn gender_is(gender: Gender) -> Self {
        ClientFilter::GenderIs(gender)
    }

    /// Check if a record matches this filter
    pub fn matches(&self, record: &ClientRecord) -> bool {
        match self {
            ClientFilter::NameContains(part) => record.name.contains(part.as_str()),
            ClientFilter::GenderIs(gender) => record.gender == *gender,
        }
    }
}

/// A set of filters combined with AND logic
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub filters: Vec<ClientFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: ClientFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check if a record matches all filters. An empty set matches everything.
    pub fn matches(&self, record: &ClientRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }
}
