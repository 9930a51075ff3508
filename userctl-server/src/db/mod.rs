//! Database layer - connection pool and user store
//!
//! # Design Principles
//!
//! - One pool per process, shared by every handler through `AppState`
//! - One statement per request, autocommitted - no transactions
//! - Row count decides existence - no check-then-act

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryUserStore;
pub use pool::{create_pool, create_pool_with_options, redact_url, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};
