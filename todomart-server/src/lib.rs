//! todomart-server: REST backend for a todo-list app and a marketplace stub
//!
//! Categories and todo lists on one side, buyers and sellers on the other,
//! each route a single SQLite read or write serialized to JSON.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ServerConfig, ServerError};
