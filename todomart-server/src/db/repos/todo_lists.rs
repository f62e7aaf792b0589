//! Todo list repository
//!
//! - create: INSERT ... RETURNING, status defaults to false
//! - update: full overwrite of every client field, no partial patching

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::lenient;

const COLUMNS: &str = "id, title, description, category_id, status, created_at, updated_at";

/// Todo list record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TodoList {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-writable todo list fields.
///
/// Absent fields deserialize to `None` and are stored as NULL. Numbers and
/// booleans may arrive as text from query strings and forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoListFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub status: Option<bool>,
}

/// Todo list repository
pub struct TodoListRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoListRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TodoList>, DbError> {
        let rows = sqlx::query_as::<_, TodoList>(&format!(
            "SELECT {COLUMNS} FROM todo_lists ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<TodoList, DbError> {
        sqlx::query_as::<_, TodoList>(&format!("SELECT {COLUMNS} FROM todo_lists WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("todo_list", id))
    }

    /// Insert a todo list. A missing status is stored as `false`.
    pub async fn create(&self, fields: TodoListFields) -> Result<TodoList, DbError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, TodoList>(&format!(
            r#"
            INSERT INTO todo_lists (title, description, category_id, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(fields.title)
        .bind(fields.description)
        .bind(fields.category_id)
        .bind(fields.status.unwrap_or(false))
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = row.id, "todo list created");
        Ok(row)
    }

    /// Overwrite title, description, category_id and status on an existing row.
    pub async fn update(&self, id: i64, fields: TodoListFields) -> Result<TodoList, DbError> {
        sqlx::query_as::<_, TodoList>(&format!(
            r#"
            UPDATE todo_lists
            SET title = ?, description = ?, category_id = ?, status = ?, updated_at = ?
            WHERE id = ?
            RETURNING {COLUMNS}
            "#
        ))
        .bind(fields.title)
        .bind(fields.description)
        .bind(fields.category_id)
        .bind(fields.status)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("todo_list", id))
    }
}
