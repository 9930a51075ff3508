//! userctl-server: HTTP CRUD service for the `users` table
//!
//! One pooled PostgreSQL client is built at startup and injected into every
//! handler through [`AppState`]. Each request runs a single parameterized
//! statement and maps the row count to a status code.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{MemoryUserStore, PgUserStore, StoreError, UserStore};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
