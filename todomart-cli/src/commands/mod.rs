//! Command implementations for the todomart CLI

pub mod routes;
pub mod serve;

pub use routes::run_routes;
pub use serve::run_serve;
