//! In-process user store
//!
//! Behaves like the `users` table for the five statements the service runs:
//! ids come from a sequence that never reuses a value, and each call holds the
//! lock for its whole duration so no statement is observed half-applied.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User, UserId};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, User>,
    last_id: i32,
}

/// Map-backed store for tests and local runs without PostgreSQL
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored.
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.table.lock().await.rows.get(&id.get()).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, StoreError> {
        let mut table = self.table.lock().await;
        table.last_id += 1;
        let created = User {
            id: table.last_id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: UserId, user: &NewUser) -> Result<Option<User>, StoreError> {
        let mut table = self.table.lock().await;
        Ok(table.rows.get_mut(&id.get()).map(|row| {
            row.name = user.name.clone();
            row.email = user.email.clone();
            row.password = user.password.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.table.lock().await.rows.remove(&id.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: "a@x.com".into(),
            password: "p1".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryUserStore::new();
        let first = store.create(&new_user("Ana")).await.unwrap();
        store.delete(UserId(first.id)).await.unwrap();
        let second = store.create(&new_user("Bo")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let store = MemoryUserStore::new();
        let created = store.create(&new_user("Ana")).await.unwrap();
        let replacement = NewUser {
            name: "Ana B".into(),
            email: "b@x.com".into(),
            password: "p2".into(),
        };

        let updated = store
            .update(UserId(created.id), &replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            updated,
            User {
                id: created.id,
                name: "Ana B".into(),
                email: "b@x.com".into(),
                password: "p2".into(),
            }
        );
    }

    #[tokio::test]
    async fn missing_rows_are_none() {
        let store = MemoryUserStore::new();
        assert!(store.get(UserId(1)).await.unwrap().is_none());
        assert!(store.update(UserId(1), &new_user("Ana")).await.unwrap().is_none());
        assert!(store.delete(UserId(1)).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryUserStore::new();
        for name in ["Ana", "Bo", "Cy"] {
            store.create(&new_user(name)).await.unwrap();
        }
        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Ana", "Bo", "Cy"]);
    }
}
