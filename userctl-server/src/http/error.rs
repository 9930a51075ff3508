//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! The `message` field carries the human-readable text clients rely on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::{UserId, ValidationError};

/// Message returned for every store failure, whatever the cause.
pub const STORE_FAILURE_MESSAGE: &str = "Something went wrong";

/// Handler that validated a body; selects the 400 wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
}

impl WriteOp {
    fn missing_fields_message(self) -> &'static str {
        match self {
            Self::Create => "Please fill in your name, email and password",
            Self::Update => "Please provide values for name, email, password",
        }
    }
}

/// Handler that addressed a row by id; selects the 404 wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOp {
    Read,
    Update,
    Delete,
}

impl LookupOp {
    fn not_found_message(self, id: UserId) -> String {
        match self {
            Self::Read => format!("The user with the id {} does not exist", id),
            Self::Update => format!(
                "The user with id {} that you are trying to update does not exist",
                id
            ),
            Self::Delete => format!(
                "The user with id {} that you are trying to delete does not exist",
                id
            ),
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// name, email or password absent or empty (400)
    MissingFields {
        operation: WriteOp,
        fields: Vec<&'static str>,
    },

    /// Path id is not an integer (400)
    InvalidId(ValidationError),

    /// Body declared JSON or form data but could not be decoded (400)
    MalformedBody { reason: String },

    /// Statement touched zero rows (404)
    NotFound { operation: LookupOp, id: UserId },

    /// Store error (500, logged)
    Store(StoreError),
}

impl ApiError {
    /// Map a failed payload validation to the wording of `operation`.
    pub fn from_validation(operation: WriteOp, err: ValidationError) -> Self {
        match err {
            ValidationError::MissingFields { fields } => Self::MissingFields { operation, fields },
            ValidationError::InvalidId { .. } => Self::InvalidId(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields { .. } | Self::InvalidId(_) | Self::MalformedBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "missing_fields",
            Self::InvalidId(_) => "invalid_id",
            Self::MalformedBody { .. } => "malformed_body",
            Self::NotFound { .. } => "not_found",
            Self::Store(_) => "internal_error",
        }
    }

    /// Client-facing message. Never includes store internals.
    pub fn message(&self) -> String {
        match self {
            Self::MissingFields { operation, .. } => operation.missing_fields_message().to_owned(),
            Self::InvalidId(e) => e.to_string(),
            Self::MalformedBody { reason } => format!("request body could not be parsed: {}", reason),
            Self::NotFound { operation, id } => operation.not_found_message(*id),
            Self::Store(_) => STORE_FAILURE_MESSAGE.to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // Log the actual error, return generic message
            Self::Store(e) => tracing::error!("Database error: {}", e),
            Self::MissingFields { fields, .. } => {
                tracing::debug!(?fields, "rejected payload with missing fields")
            }
            _ => {}
        }

        let body = json!({
            "error": self.kind(),
            "message": self.message(),
        });

        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
