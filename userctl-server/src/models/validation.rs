//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are absent or empty
    MissingFields { fields: Vec<&'static str> },

    /// Path id is not an integer
    InvalidId { raw: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::InvalidId { raw } => {
                write!(f, "invalid user id '{}': must be an integer", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
