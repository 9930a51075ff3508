//! User entity and request payloads
//!
//! `UserFields` is what arrives on the wire; `NewUser` is what reaches the
//! store. The only way from one to the other is `UserFields::validate`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// User row as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Store-assigned user id, parsed from a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i32);

impl UserId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId { raw: s.to_owned() })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw create/update body. Every field is optional until validated.
///
/// Values of any JSON type are accepted and kept in their string form;
/// `null`, `false` and `0` read as absent, like an empty string does.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFields {
    #[serde(default, deserialize_with = "loose_field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_field")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "loose_field")]
    pub password: Option<String>,
}

fn loose_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        // Arrays and objects are kept as compact JSON text
        Some(other) => Some(other.to_string()),
    })
}

/// Validated create/update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserFields {
    /// Check that name, email and password are all present and non-empty.
    ///
    /// Whitespace is not trimmed: `" "` counts as a value.
    ///
    /// # Example
    /// ```
    /// use userctl_server::models::UserFields;
    ///
    /// let fields = UserFields {
    ///     name: Some("Ana".into()),
    ///     email: Some("a@x.com".into()),
    ///     password: None,
    /// };
    /// assert!(fields.validate().is_err());
    /// ```
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(field, _)| field)
        .collect();

        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password)) if missing.is_empty() => Ok(NewUser {
                name,
                email,
                password,
            }),
            _ => Err(ValidationError::MissingFields { fields: missing }),
        }
    }
}
