use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::Store;
use crate::error::AppResult;
use crate::models::Entity;

/// In-process table keyed by identifier. Iteration follows first insertion, so
/// `find_all` is stable across calls.
pub struct MemoryStore<E> {
    rows: Arc<RwLock<IndexMap<String, E>>>,
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for MemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn save(&self, mut entity: E) -> AppResult<E> {
        let id = match entity.id() {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                entity.set_id(id.clone());
                id
            }
        };

        self.rows.write().await.insert(id.clone(), entity.clone());
        debug!(table = E::TABLE, id = %id, "Saved row in memory");
        Ok(entity)
    }

    async fn find_all(&self) -> AppResult<Vec<E>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
