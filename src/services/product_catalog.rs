use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Store;
use crate::error::AppResult;
use crate::models::{HealthStatus, InventoryItem, Record};

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    fn health(&self) -> HealthStatus;

    async fn list_inventory(&self) -> AppResult<Vec<Record>>;

    async fn list_products(&self) -> AppResult<Vec<Record>>;
}

pub struct ProductCatalogService {
    inventory: Arc<dyn Store<InventoryItem>>,
}

impl ProductCatalogService {
    pub fn new(inventory: Arc<dyn Store<InventoryItem>>) -> Self {
        Self { inventory }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn list_inventory(&self) -> AppResult<Vec<Record>> {
        super::list_all(self.inventory.as_ref()).await
    }

    async fn list_products(&self) -> AppResult<Vec<Record>> {
        // Product lookup has no downstream client yet.
        Ok(Vec::new())
    }
}
