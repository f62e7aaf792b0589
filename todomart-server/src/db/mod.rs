//! Database layer - connection pool, schema bootstrap and repositories
//!
//! Every repository method is a single statement against the pool; there
//! are no multi-entity transactions.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
