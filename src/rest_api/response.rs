//! # Response Formatting
//!
//! Response shapes for the client API.

use serde::Serialize;

use crate::store::{ClientId, ClientRecord, Gender};

/// Read-only projection of a client record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub phone: String,
    pub enabled: bool,
}

impl From<&ClientRecord> for ClientView {
    fn from(record: &ClientRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            gender: record.gender,
            phone: record.phone.clone(),
            enabled: record.enabled,
        }
    }
}

/// Body returned by create, update and enable/disable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdResponse {
    pub id: ClientId,
}

impl IdResponse {
    pub fn new(id: ClientId) -> Self {
        Self { id }
    }
}
