//! HTTP server layer
//!
//! Axum server with:
//! - An explicit endpoint table (`routes::endpoints`)
//! - Permissive CORS
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses
//! - Parameters from query strings, forms or JSON bodies

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{endpoints, Endpoint};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
