//! The store client seam shared by all handlers

use async_trait::async_trait;

use crate::models::{NewUser, User, UserId};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid connection string: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// One statement per method, each run as its own autocommitted unit.
///
/// By-id operations return `None` when the statement touched zero rows; that
/// row count is the only existence check anywhere in the service.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// `SELECT * FROM users`
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// `SELECT * FROM users WHERE id = $1`
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// `INSERT ... RETURNING *`; the store assigns the id.
    async fn create(&self, user: &NewUser) -> Result<User, StoreError>;

    /// Replace name, email and password together.
    async fn update(&self, id: UserId, user: &NewUser) -> Result<Option<User>, StoreError>;

    /// Remove the row and hand back what was removed.
    async fn delete(&self, id: UserId) -> Result<Option<User>, StoreError>;
}
