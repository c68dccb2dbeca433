use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Store;
use crate::error::AppResult;
use crate::models::{HealthStatus, OrderItem, Record};

#[async_trait]
pub trait OrderManagement: Send + Sync {
    fn health(&self) -> HealthStatus;

    async fn list_order_items(&self) -> AppResult<Vec<Record>>;

    async fn list_orders(&self) -> AppResult<Vec<Record>>;
}

pub struct OrderManagementService {
    order_items: Arc<dyn Store<OrderItem>>,
}

impl OrderManagementService {
    pub fn new(order_items: Arc<dyn Store<OrderItem>>) -> Self {
        Self { order_items }
    }
}

#[async_trait]
impl OrderManagement for OrderManagementService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn list_order_items(&self) -> AppResult<Vec<Record>> {
        super::list_all(self.order_items.as_ref()).await
    }

    async fn list_orders(&self) -> AppResult<Vec<Record>> {
        // Order lookup has no downstream client yet.
        Ok(Vec::new())
    }
}
