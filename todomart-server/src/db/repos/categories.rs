//! Category repository
//!
//! Categories are read-only over HTTP; `create` exists for callers that
//! populate the table directly.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: Option<String>,
}

/// Fields for a new category
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: Option<String>,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every category, oldest first.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", id))
    }

    pub async fn create(&self, new: NewCategory) -> Result<Category, DbError> {
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(new.name)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, schema};

    async fn pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        schema::bootstrap(&pool).await.unwrap();
        pool
    }

    fn named(name: &str) -> NewCategory {
        NewCategory {
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let pool = pool().await;
        let repo = CategoryRepo::new(&pool);

        let home = repo.create(named("Home")).await.unwrap();
        let office = repo.create(named("Office")).await.unwrap();

        assert_eq!(repo.get(home.id).await.unwrap(), home);
        assert_eq!(repo.get(office.id).await.unwrap().name.as_deref(), Some("Office"));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let pool = pool().await;
        let repo = CategoryRepo::new(&pool);
        for name in ["Personal", "Home", "Office", "Hobbies"] {
            repo.create(named(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        assert_eq!(names, ["Personal", "Home", "Office", "Hobbies"]);
    }

    #[tokio::test]
    async fn null_name_is_accepted() {
        let pool = pool().await;
        let category = CategoryRepo::new(&pool)
            .create(NewCategory::default())
            .await
            .unwrap();
        assert_eq!(category.name, None);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let pool = pool().await;
        let err = CategoryRepo::new(&pool).get(42).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound { resource: "category", ref id } if id == "42"
        ));
    }
}
