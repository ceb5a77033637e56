//! HTTP server layer
//!
//! Axum server with:
//! - `/Todo/<Action>` routes consumed by the calendar UI
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON bodies for every outcome, including failures

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::{ApiError, Envelope};
