//! HTTP server layer
//!
//! Axum server with:
//! - CORS (any origin)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, LookupOp, WriteOp};
pub use server::{build_router, run_server, ServerConfig, ServerError, DEFAULT_PORT};
