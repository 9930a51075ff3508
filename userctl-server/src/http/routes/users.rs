//! User endpoints
//!
//! Each handler runs exactly one statement against the store and maps the
//! outcome: rows to 200/201, zero rows to 404, store failure to 500.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::{ApiError, LookupOp, WriteOp};
use crate::http::extractors::{UserPayload, ValidUserId};
use crate::models::User;
use crate::state::AppState;

/// Status for a successful PUT. Existing clients expect 201 here.
pub const UPDATED_STATUS: StatusCode = StatusCode::CREATED;

/// GET /users - list every user
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store().list().await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<AppState>,
    ValidUserId(id): ValidUserId,
) -> Result<Json<User>, ApiError> {
    let user = state.store().get(id).await?.ok_or(ApiError::NotFound {
        operation: LookupOp::Read,
        id,
    })?;

    tracing::debug!(%id, "fetched user");
    Ok(Json(user))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<AppState>,
    UserPayload(fields): UserPayload,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = fields
        .validate()
        .map_err(|e| ApiError::from_validation(WriteOp::Create, e))?;

    let created = state.store().create(&new_user).await?;

    tracing::info!(id = created.id, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /users/{id} - replace name, email and password
async fn update_user(
    State(state): State<AppState>,
    ValidUserId(id): ValidUserId,
    UserPayload(fields): UserPayload,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = fields
        .validate()
        .map_err(|e| ApiError::from_validation(WriteOp::Update, e))?;

    let updated = state
        .store()
        .update(id, &new_user)
        .await?
        .ok_or(ApiError::NotFound {
            operation: LookupOp::Update,
            id,
        })?;

    tracing::info!(%id, "user updated");
    Ok((UPDATED_STATUS, Json(updated)))
}

/// DELETE /users/{id} - delete a user, confirming in plain text
async fn delete_user(
    State(state): State<AppState>,
    ValidUserId(id): ValidUserId,
) -> Result<String, ApiError> {
    let deleted = state.store().delete(id).await?.ok_or(ApiError::NotFound {
        operation: LookupOp::Delete,
        id,
    })?;

    tracing::info!(%id, "user deleted");
    Ok(format!("The user \"{}\" has been deleted", deleted.name))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
