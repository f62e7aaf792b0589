//! Buyer and seller repository
//!
//! Buyers and sellers have the same columns, so one repository serves both
//! tables, selected by `AccountKind`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::PasswordDigest;

const COLUMNS: &str = "id, name, email, password, created_at, updated_at";

/// Which account table a repository targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Buyer,
    Seller,
}

impl AccountKind {
    fn table(self) -> &'static str {
        match self {
            Self::Buyer => "buyers",
            Self::Seller => "sellers",
        }
    }

    /// Resource name used in not-found errors.
    pub fn resource(self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Buyer => "Buyer",
            Self::Seller => "Seller",
        }
    }
}

/// Buyer or seller record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Account {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new account; the password is already hashed.
#[derive(Debug, Clone, Default)]
pub struct NewAccount {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<PasswordDigest>,
}

/// Account repository for one of the two account tables
pub struct AccountRepo<'a> {
    pool: &'a SqlitePool,
    kind: AccountKind,
}

impl<'a> AccountRepo<'a> {
    pub fn new(pool: &'a SqlitePool, kind: AccountKind) -> Self {
        Self { pool, kind }
    }

    pub async fn list(&self) -> Result<Vec<Account>, DbError> {
        let rows = sqlx::query_as::<_, Account>(&format!(
            "SELECT {COLUMNS} FROM {} ORDER BY id",
            self.kind.table()
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Account, DbError> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {COLUMNS} FROM {} WHERE id = ?",
            self.kind.table()
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(self.kind.resource(), id))
    }

    pub async fn create(&self, new: NewAccount) -> Result<Account, DbError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Account>(&format!(
            r#"
            INSERT INTO {} (name, email, password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#,
            self.kind.table()
        ))
        .bind(new.name)
        .bind(new.email)
        .bind(new.password.map(|p| p.as_str().to_owned()))
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(kind = self.kind.resource(), id = row.id, "account created");
        Ok(row)
    }

    /// Delete an account and return a confirmation naming it.
    pub async fn delete(&self, id: i64) -> Result<String, DbError> {
        let (name,): (Option<String>,) = sqlx::query_as(&format!(
            "DELETE FROM {} WHERE id = ? RETURNING name",
            self.kind.table()
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(self.kind.resource(), id))?;

        let label = self.kind.label();
        Ok(match name {
            Some(name) => format!("{label} '{name}' has been deleted"),
            None => format!("{label} #{id} has been deleted"),
        })
    }
}
