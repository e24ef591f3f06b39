//! In-memory Document Store
//!
//! Keeps documents as JSON values in a single map guarded by an async
//! `RwLock`. Records go through the same serde path as the PostgreSQL
//! store so both behave alike. Nothing is persisted.

use crate::domain::entities::{Record, Stored};
use crate::domain::repository::DocumentStore;
use crate::error::{MarinaError, MarinaResult};
use kernel::id::Id;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process store, shared by cloning
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    inner: Arc<RwLock<Collections>>,
}

#[derive(Default)]
struct Collections {
    /// Ids are unique across kinds, like a single sequence
    last_id: i64,
    documents: BTreeMap<(&'static str, i64), serde_json::Value>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_id<R: Record>(raw: i64) -> MarinaResult<Id<R>> {
    Id::new(raw).ok_or_else(|| MarinaError::Internal(format!("invalid {} id {raw}", R::KIND)))
}

impl DocumentStore for MemoryDocumentStore {
    async fn insert<R: Record>(&self, record: &R) -> MarinaResult<Id<R>> {
        let body = serde_json::to_value(record)?;

        let mut collections = self.inner.write().await;
        collections.last_id += 1;
        let raw = collections.last_id;
        collections.documents.insert((R::KIND, raw), body);
        drop(collections);

        to_id(raw)
    }

    async fn get<R: Record>(&self, id: Id<R>) -> MarinaResult<Option<Stored<R>>> {
        let body = self
            .inner
            .read()
            .await
            .documents
            .get(&(R::KIND, id.get()))
            .cloned();

        match body {
            Some(body) => Ok(Some(Stored::new(id, serde_json::from_value(body)?))),
            None => Ok(None),
        }
    }

    async fn list<R: Record>(&self) -> MarinaResult<Vec<Stored<R>>> {
        let collections = self.inner.read().await;

        collections
            .documents
            .range((R::KIND, i64::MIN)..=(R::KIND, i64::MAX))
            .map(|((_, raw), body)| -> MarinaResult<Stored<R>> {
                Ok(Stored::new(
                    to_id(*raw)?,
                    serde_json::from_value(body.clone())?,
                ))
            })
            .collect()
    }

    async fn update<R: Record>(&self, id: Id<R>, record: &R) -> MarinaResult<bool> {
        let body = serde_json::to_value(record)?;

        let mut collections = self.inner.write().await;
        match collections.documents.get_mut(&(R::KIND, id.get())) {
            Some(existing) => {
                *existing = body;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete<R: Record>(&self, id: Id<R>) -> MarinaResult<bool> {
        let removed = self
            .inner
            .write()
            .await
            .documents
            .remove(&(R::KIND, id.get()));

        Ok(removed.is_some())
    }
}
