//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The database file
//! is created on first connect.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://todomart.db`
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://todomart.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Every connection to `sqlite::memory:` opens a fresh database, so the pool
/// is pinned to a single connection that never expires.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_pool_acquires_connection() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn file_pool_creates_missing_database() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("todomart.db");
        let url = format!("sqlite://{}", path.display());

        let pool = create_pool(&url).await.expect("pool creation failed");
        sqlx::query("CREATE TABLE probe (id INTEGER PRIMARY KEY)")
            .execute(&pool)
            .await
            .expect("create failed");

        assert!(path.exists());
    }

    #[tokio::test]
    async fn memory_pool_keeps_state_between_queries() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        sqlx::query("CREATE TABLE probe (id INTEGER PRIMARY KEY)")
            .execute(&pool)
            .await
            .expect("create failed");
        sqlx::query("INSERT INTO probe DEFAULT VALUES")
            .execute(&pool)
            .await
            .expect("insert failed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM probe")
            .fetch_one(&pool)
            .await
            .expect("count failed");
        assert_eq!(count, 1);
    }
}
