//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps one operation to one query.
//! Lookups that match no row surface as `DbError::NotFound`.

pub mod accounts;
pub mod categories;
pub mod todo_lists;

pub use accounts::{Account, AccountKind, AccountRepo, NewAccount};
pub use categories::{Category, CategoryRepo, NewCategory};
pub use todo_lists::{TodoList, TodoListFields, TodoListRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
