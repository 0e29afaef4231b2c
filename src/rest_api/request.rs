//! # Request Bodies
//!
//! Every field is optional at the serde level so a missing field surfaces as
//! a `MissingParam` naming it, rather than a generic decode error.

use serde::Deserialize;

use crate::store::{ClientId, Gender};

use super::errors::{RestError, RestResult};

/// Body of `POST /api/v1/client`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
}

/// Body of `PUT /api/v1/client/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
}

/// Client fields after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFields {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub phone: String,
}

fn required_text(value: Option<&String>, field: &str) -> RestResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(RestError::MissingParam(field.to_string())),
    }
}

fn validate_fields(
    name: Option<&String>,
    email: Option<&String>,
    gender: Option<Gender>,
    phone: Option<&String>,
) -> RestResult<ClientFields> {
    Ok(ClientFields {
        name: required_text(name, "name")?,
        email: required_text(email, "email")?,
        gender: gender.ok_or_else(|| RestError::MissingParam("gender".to_string()))?,
        phone: required_text(phone, "phone")?,
    })
}

impl CreateClient {
    pub fn validate(&self) -> RestResult<ClientFields> {
        validate_fields(
            self.name.as_ref(),
            self.email.as_ref(),
            self.gender,
            self.phone.as_ref(),
        )
    }
}

impl UpdateClient {
    /// Validate against the identifier taken from the path
    pub fn validate(&self, path_id: ClientId) -> RestResult<ClientFields> {
        let body_id = self
            .id
            .ok_or_else(|| RestError::MissingParam("id".to_string()))?;
        if body_id != path_id as i64 {
            return Err(RestError::IdMismatch {
                path: path_id,
                body: body_id,
            });
        }

        validate_fields(
            self.name.as_ref(),
            self.email.as_ref(),
            self.gender,
            self.phone.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(json: serde_json::Value) -> CreateClient {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_valid_create() {
        let fields = create(serde_json::json!({
            "name": "Bob",
            "email": "b@x.com",
            "gender": "Male",
            "phone": "123"
        }))
        .validate()
        .unwrap();

        assert_eq!(fields.name, "Bob");
        assert_eq!(fields.gender, Gender::Male);
    }

    #[test]
    fn test_missing_field_is_named() {
        let err = create(serde_json::json!({
            "name": "Bob",
            "gender": "Male",
            "phone": "123"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err, RestError::MissingParam("email".to_string()));
    }

    #[test]
    fn test_blank_and_null_fields_are_missing() {
        let err = create(serde_json::json!({
            "name": "   ",
            "email": "b@x.com",
            "gender": "Male",
            "phone": "123"
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err, RestError::MissingParam("name".to_string()));

        let err = create(serde_json::json!({
            "name": "Bob",
            "email": "b@x.com",
            "gender": null,
            "phone": "123"
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err, RestError::MissingParam("gender".to_string()));
    }

    #[test]
    fn test_update_id_must_match_path() {
        let body: UpdateClient = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Bob",
            "email": "b@x.com",
            "gender": "Male",
            "phone": "123"
        }))
        .unwrap();

        assert!(body.validate(4).is_ok());
        assert_eq!(
            body.validate(5).unwrap_err(),
            RestError::IdMismatch { path: 5, body: 4 }
        );
    }

    #[test]
    fn test_update_requires_id() {
        let body = UpdateClient {
            name: Some("Bob".to_string()),
            ..Default::default()
        };
        assert_eq!(
            body.validate(1).unwrap_err(),
            RestError::MissingParam("id".to_string())
        );
    }
}
