//! Shopping list repository
//!
//! - index: active rows inside the window, ordered by id
//! - create/update: single statement with RETURNING
//! - delete: flag flip, never a physical DELETE

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::store::{ListRecord, ListStore, StoreError};

/// PostgreSQL-backed list store
#[derive(Debug, Clone)]
pub struct PgListStore {
    pool: PgPool,
}

impl PgListStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ListStore for PgListStore {
    async fn index(&self, since: DateTime<Utc>) -> Result<Vec<ListRecord>, StoreError> {
        let lists: Vec<ListRecord> = sqlx::query_as(
            r#"
            SELECT id, description, created_on
            FROM shopping_lists
            WHERE deleted = FALSE
            AND created_on >= $1
            ORDER BY id
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(lists)
    }

    async fn create(&self, description: &str) -> Result<ListRecord, StoreError> {
        let list: ListRecord = sqlx::query_as(
            r#"
            INSERT INTO shopping_lists (description)
            VALUES ($1)
            RETURNING id, description, created_on
            "#,
        )
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(list)
    }

    async fn get(&self, id: i64) -> Result<ListRecord, StoreError> {
        sqlx::query_as(
            r#"
            SELECT id, description, created_on
            FROM shopping_lists
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::list_not_found(id))
    }

    async fn update(&self, id: i64, description: &str) -> Result<ListRecord, StoreError> {
        sqlx::query_as(
            r#"
            UPDATE shopping_lists
            SET description = $1
            WHERE id = $2
            RETURNING id, description, created_on
            "#,
        )
        .bind(description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::list_not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE shopping_lists SET deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
