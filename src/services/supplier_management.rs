use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Store;
use crate::error::AppResult;
use crate::models::{HealthStatus, Record, Supplier};

#[async_trait]
pub trait SupplierManagement: Send + Sync {
    fn health(&self) -> HealthStatus;

    async fn list_suppliers(&self) -> AppResult<Vec<Record>>;
}

pub struct SupplierManagementService {
    suppliers: Arc<dyn Store<Supplier>>,
}

impl SupplierManagementService {
    pub fn new(suppliers: Arc<dyn Store<Supplier>>) -> Self {
        Self { suppliers }
    }
}

#[async_trait]
impl SupplierManagement for SupplierManagementService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn list_suppliers(&self) -> AppResult<Vec<Record>> {
        super::list_all(self.suppliers.as_ref()).await
    }
}
