//! In-process list store
//!
//! Mirrors the PostgreSQL semantics (serial ids, soft delete, index window)
//! without a database. Used by the router tests and `serve --in-memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{ListRecord, ListStore, StoreError};

#[derive(Debug, Clone)]
struct Row {
    record: ListRecord,
    deleted: bool,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Row>,
}

/// List store backed by a `BTreeMap`
#[derive(Debug, Default)]
pub struct MemoryListStore {
    inner: RwLock<Inner>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a list with an explicit creation time.
    pub async fn insert_at(&self, description: &str, created_on: DateTime<Utc>) -> ListRecord {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let record = ListRecord {
            id: inner.last_id,
            description: description.to_owned(),
            created_on,
        };
        inner.rows.insert(
            record.id,
            Row {
                record: record.clone(),
                deleted: false,
            },
        );
        record
    }

    /// Whether a row exists and is flagged deleted.
    pub async fn is_deleted(&self, id: i64) -> Option<bool> {
        self.inner.read().await.rows.get(&id).map(|row| row.deleted)
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn index(&self, since: DateTime<Utc>) -> Result<Vec<ListRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|row| !row.deleted && row.record.created_on >= since)
            .map(|row| row.record.clone())
            .collect())
    }

    async fn create(&self, description: &str) -> Result<ListRecord, StoreError> {
        Ok(self.insert_at(description, Utc::now()).await)
    }

    async fn get(&self, id: i64) -> Result<ListRecord, StoreError> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.record.clone())
            .ok_or_else(|| StoreError::list_not_found(id))
    }

    async fn update(&self, id: i64, description: &str) -> Result<ListRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or_else(|| StoreError::list_not_found(id))?;
        row.record.description = description.to_owned();
        Ok(row.record.clone())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.deleted = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryListStore::new();
        let a = store.create("Groceries").await.unwrap();
        let b = store.create("Hardware").await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.get(1).await.unwrap().description, "Groceries");
    }

    #[tokio::test]
    async fn deleted_lists_are_hidden() {
        let store = MemoryListStore::new();
        let list = store.create("Groceries").await.unwrap();

        assert_eq!(store.delete(list.id).await.unwrap(), 1);
        assert!(matches!(
            store.get(list.id).await,
            Err(StoreError::NotFound { .. })
        ));

        let since = Utc::now() - Duration::days(7);
        assert!(store.index(since).await.unwrap().is_empty());
        assert_eq!(store.is_deleted(list.id).await, Some(true));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryListStore::new();
        let list = store.create("Groceries").await.unwrap();
        assert_eq!(store.delete(list.id).await.unwrap(), 1);
        assert_eq!(store.delete(list.id).await.unwrap(), 1);
        assert_eq!(store.delete(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn index_applies_window() {
        let store = MemoryListStore::new();
        let now = Utc::now();
        let since = now - Duration::days(7);
        store.insert_at("old", now - Duration::days(8)).await;
        store
            .insert_at("just before", since - Duration::seconds(1))
            .await;
        let boundary = store.insert_at("at cutoff", since).await;
        let recent = store.insert_at("recent", now - Duration::days(1)).await;

        let listed = store.index(since).await.unwrap();
        assert_eq!(listed, vec![boundary, recent]);
    }

    #[tokio::test]
    async fn update_ignores_deleted_flag() {
        let store = MemoryListStore::new();
        let list = store.create("Groceries").await.unwrap();
        store.delete(list.id).await.unwrap();

        let updated = store.update(list.id, "Pharmacy").await.unwrap();
        assert_eq!(updated.description, "Pharmacy");
        assert_eq!(updated.created_on, list.created_on);
        // Still soft-deleted
        assert!(store.get(list.id).await.is_err());
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryListStore::new();
        assert!(matches!(
            store.update(3, "x").await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
