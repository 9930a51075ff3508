//! PostgreSQL-backed user store
//!
//! Every value reaches the server through `.bind()`; statements are fixed
//! strings with positional placeholders and are never assembled from input.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User, UserId};

const LIST_USERS: &str = "SELECT * FROM users";
const GET_USER: &str = "SELECT * FROM users WHERE id = $1";
const INSERT_USER: &str = "INSERT INTO users(name, email, password) VALUES($1, $2, $3) RETURNING *";
const UPDATE_USER: &str =
    "UPDATE users SET name = $1, email = $2, password = $3 WHERE id = $4 RETURNING *";
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1 RETURNING *";

/// User repository over a shared pool
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(LIST_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(GET_USER)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create(&self, user: &NewUser) -> Result<User, StoreError> {
        let created = sqlx::query_as::<_, User>(INSERT_USER)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, id: UserId, user: &NewUser) -> Result<Option<User>, StoreError> {
        let updated = sqlx::query_as::<_, User>(UPDATE_USER)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let deleted = sqlx::query_as::<_, User>(DELETE_USER)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }
}
