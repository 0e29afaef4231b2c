//! # Query Parameter Parser
//!
//! Turns raw path and query strings into typed inputs for the resolver and
//! the mutation handlers. Unknown query keys are ignored.

use std::collections::HashMap;

use crate::store::{ClientId, Gender};

use super::errors::{RestError, RestResult};

/// Which filter combination a search request selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    Name(String),
    Gender(Gender),
    NameAndGender(String, Gender),
}

impl SearchCriteria {
    /// Parse `name` and `gender` from the query string.
    ///
    /// An empty `name` counts as absent. Having neither is a malformed
    /// request; there is no fallback to listing everything.
    pub fn parse(params: &HashMap<String, String>) -> RestResult<Self> {
        let name = params
            .get("name")
            .filter(|n| !n.is_empty())
            .cloned();
        let gender = params
            .get("gender")
            .filter(|g| !g.is_empty())
            .map(|g| parse_gender(g))
            .transpose()?;

        Self::from_parts(name, gender)
    }

    /// Select the filter combination for optional inputs
    pub fn from_parts(name: Option<String>, gender: Option<Gender>) -> RestResult<Self> {
        match (name, gender) {
            (Some(name), None) => Ok(SearchCriteria::Name(name)),
            (None, Some(gender)) => Ok(SearchCriteria::Gender(gender)),
            (Some(name), Some(gender)) => Ok(SearchCriteria::NameAndGender(name, gender)),
            (None, None) => Err(RestError::MissingFilter),
        }
    }
}

/// Parse a path identifier; must be a positive integer
pub fn parse_client_id(raw: &str) -> RestResult<ClientId> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id as ClientId),
        _ => Err(RestError::InvalidId(raw.to_string())),
    }
}

/// Parse the required `enabled` flag of an enable/disable request
pub fn parse_enabled(params: &HashMap<String, String>) -> RestResult<bool> {
    let raw = params
        .get("enabled")
        .ok_or_else(|| RestError::MissingParam("enabled".to_string()))?;

    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(RestError::InvalidQueryParam(format!(
            "enabled must be true or false, got '{}'",
            raw
        )))
    }
}

fn parse_gender(raw: &str) -> RestResult<Gender> {
    raw.parse::<Gender>().map_err(RestError::InvalidQueryParam)
}
