//! List storage
//!
//! `ListStore` is the seam between HTTP handlers and persistence:
//! - `PgListStore` (in `db`) talks to PostgreSQL
//! - `MemoryListStore` keeps rows in-process for tests and demos
//!
//! Every operation is a single statement. Writes return the row they wrote,
//! so there is no follow-up read that could observe a concurrent change.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub use memory::MemoryListStore;

/// List row as stored, minus the soft-delete flag.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ListRecord {
    pub id: i64,
    pub description: String,
    pub created_on: DateTime<Utc>,
}

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl StoreError {
    pub(crate) fn list_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "list",
            id: id.to_string(),
        }
    }
}

/// CRUD over shopping lists (testable)
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Active lists created at or after `since`, ordered by id.
    async fn index(&self, since: DateTime<Utc>) -> Result<Vec<ListRecord>, StoreError>;

    /// Insert a list; id and timestamp are assigned by storage.
    async fn create(&self, description: &str) -> Result<ListRecord, StoreError>;

    /// Fetch an active list. Soft-deleted lists are `NotFound`.
    async fn get(&self, id: i64) -> Result<ListRecord, StoreError>;

    /// Replace the description, whether or not the list is soft-deleted.
    async fn update(&self, id: i64, description: &str) -> Result<ListRecord, StoreError>;

    /// Soft-delete a list. Returns the number of rows touched (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Cheap liveness check for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
