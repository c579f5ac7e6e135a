use std::{collections::BTreeMap, sync::Arc};

use sea_orm::DbErr;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

struct TableState<V> {
    rows: BTreeMap<i64, V>,
    next_id: i64,
}

/// In-memory stand-in for a table with a `BIGSERIAL` primary key.
///
/// Clones share the same rows, so one table can back several repositories
/// (enrollments resolve students and courses through shared tables).
/// A table built with [`MemoryTable::failing`] rejects every call with the
/// given store error, which is how tests exercise failure passthrough.
pub struct MemoryTable<V> {
    inner: Arc<RwLock<TableState<V>>>,
    failure: Option<String>,
}

impl<V> Clone for MemoryTable<V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner), failure: self.failure.clone() }
    }
}

impl<V: Clone> Default for MemoryTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> MemoryTable<V> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TableState { rows: BTreeMap::new(), next_id: 1 })),
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::new() }
    }

    fn check(&self) -> Result<(), ServiceError> {
        match &self.failure {
            Some(msg) => Err(ServiceError::Db(DbErr::Custom(msg.clone()))),
            None => Ok(()),
        }
    }

    /// All rows in id order.
    pub async fn list(&self) -> Result<Vec<V>, ServiceError> {
        self.check()?;
        let state = self.inner.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    pub async fn get(&self, id: i64) -> Result<Option<V>, ServiceError> {
        self.check()?;
        let state = self.inner.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    /// Insert under a fresh id when `id` is `None`, otherwise insert-or-replace under `id`.
    /// `build` receives the final id.
    pub async fn upsert<F>(&self, id: Option<i64>, build: F) -> Result<V, ServiceError>
    where
        F: FnOnce(i64) -> V,
    {
        self.check()?;
        let mut state = self.inner.write().await;
        let id = match id {
            Some(id) => id,
            None => {
                let id = state.next_id;
                state.next_id += 1;
                id
            }
        };
        if id >= state.next_id {
            state.next_id = id + 1;
        }
        let row = build(id);
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Whether any row matches `pred`.
    pub async fn any<F>(&self, pred: F) -> Result<bool, ServiceError>
    where
        F: Fn(&V) -> bool,
    {
        self.check()?;
        let state = self.inner.read().await;
        Ok(state.rows.values().any(pred))
    }

    /// Remove a row; returns whether it existed.
    pub async fn remove(&self, id: i64) -> Result<bool, ServiceError> {
        self.check()?;
        let mut state = self.inner.write().await;
        Ok(state.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_table_assigns_sequential_ids() -> Result<(), anyhow::Error> {
        let table = MemoryTable::<(i64, &str)>::new();
        assert!(table.list().await?.is_empty());

        let a = table.upsert(None, |id| (id, "a")).await?;
        let b = table.upsert(None, |id| (id, "b")).await?;
        assert_eq!(a.0, 1);
        assert_eq!(b.0, 2);

        // explicit id keeps its value and pushes the sequence past it
        let c = table.upsert(Some(10), |id| (id, "c")).await?;
        assert_eq!(c.0, 10);
        let d = table.upsert(None, |id| (id, "d")).await?;
        assert_eq!(d.0, 11);

        // replace in place
        table.upsert(Some(1), |id| (id, "a2")).await?;
        assert_eq!(table.get(1).await?, Some((1, "a2")));
        assert_eq!(table.list().await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn memory_table_remove_reports_existence() -> Result<(), anyhow::Error> {
        let table = MemoryTable::<i64>::new();
        table.upsert(None, |id| id).await?;
        assert!(table.remove(1).await?);
        assert!(!table.remove(1).await?);
        assert_eq!(table.get(1).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn any_matches_on_row_content() -> Result<(), anyhow::Error> {
        let table = MemoryTable::<(i64, Option<i64>)>::new();
        table.upsert(None, |id| (id, Some(7))).await?;
        assert!(table.any(|r| r.1 == Some(7)).await?);
        assert!(!table.any(|r| r.1 == Some(8)).await?);
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_rows() -> Result<(), anyhow::Error> {
        let table = MemoryTable::<i64>::new();
        let other = table.clone();
        table.upsert(None, |id| id * 100).await?;
        assert_eq!(other.get(1).await?, Some(100));
        Ok(())
    }

    #[tokio::test]
    async fn failing_table_rejects_every_call() {
        let table = MemoryTable::<i64>::failing("db down");
        assert!(matches!(table.list().await, Err(ServiceError::Db(DbErr::Custom(ref m))) if m == "db down"));
        assert!(table.get(1).await.is_err());
        assert!(table.upsert(None, |id| id).await.is_err());
        assert!(table.remove(1).await.is_err());
    }
}
