//! Client record entity
//!
//! The store owns every `ClientRecord`. Read paths never hand out references
//! across the HTTP boundary; they project into `ClientView` instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned client identifier. Always positive.
pub type ClientId = u64;

/// Gender of a client, serialized by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
    #[serde(alias = "unknown")]
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown gender '{}'", s))
    }
}

/// A client record as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub phone: String,
    pub enabled: bool,
}

impl ClientRecord {
    /// Build a freshly created record. New records start enabled.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        email: impl Into<String>,
        gender: Gender,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            gender,
            phone: phone.into(),
            enabled: true,
        }
    }
}
