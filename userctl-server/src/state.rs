//! Application state shared across handlers

use std::sync::Arc;

use crate::db::UserStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_shared(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
}
