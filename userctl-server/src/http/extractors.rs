//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::{Form, Json};

use super::error::ApiError;
use crate::models::{UserFields, UserId, ValidationError};

/// Extract and validate an integer user id from path
pub struct ValidUserId(pub UserId);

impl<S> FromRequestParts<S> for ValidUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId(ValidationError::InvalidId { raw: String::new() }))?;

        let id = raw.parse::<UserId>().map_err(ApiError::InvalidId)?;
        Ok(Self(id))
    }
}

/// Create/update body, accepted as JSON or as an HTML form.
///
/// Any other content type (or none) yields empty fields, which then fail
/// presence validation like any other incomplete payload.
pub struct UserPayload(pub UserFields);

impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(fields) = Json::<UserFields>::from_request(req, state)
                .await
                .map_err(|e| ApiError::MalformedBody {
                    reason: e.body_text(),
                })?;
            Ok(Self(fields))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<UserFields>::from_request(req, state)
                .await
                .map_err(|e| ApiError::MalformedBody {
                    reason: e.body_text(),
                })?;
            Ok(Self(fields))
        } else {
            tracing::debug!(%content_type, "unsupported body type, treating as empty");
            Ok(Self(UserFields::default()))
        }
    }
}
