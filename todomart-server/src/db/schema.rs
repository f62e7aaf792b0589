//! Table bootstrap run at startup

use sqlx::SqlitePool;

/// Create the four entity tables if they don't exist yet.
///
/// Safe to run on every start.
pub async fn bootstrap(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Bootstrapping database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // category_id is a plain column with no REFERENCES clause, so a todo list
    // may point at a category that doesn't exist
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo_lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            description TEXT,
            category_id INTEGER,
            status BOOLEAN DEFAULT FALSE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    for table in ["buyers", "sellers"] {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT,
                password TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#
        ))
        .execute(pool)
        .await?;
    }

    tracing::info!("Schema bootstrap complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_memory_pool;

    #[tokio::test]
    async fn creates_all_tables() {
        let pool = create_memory_pool().await.unwrap();
        bootstrap(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, ["buyers", "categories", "sellers", "todo_lists"]);
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        bootstrap(&pool).await.unwrap();
        bootstrap(&pool).await.unwrap();
    }
}
