use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{HealthStatus, Record};

#[async_trait]
pub trait Orders: Send + Sync {
    fn health(&self) -> HealthStatus;

    async fn list_orders(&self) -> AppResult<Vec<Record>>;

    async fn list_deliveries(&self) -> AppResult<Vec<Record>>;
}

/// Order service. Neither listing is backed by a table yet.
#[derive(Debug, Default)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Orders for OrderService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn list_orders(&self) -> AppResult<Vec<Record>> {
        Ok(Vec::new())
    }

    async fn list_deliveries(&self) -> AppResult<Vec<Record>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listings_are_empty_placeholders() {
        let service = OrderService::new();
        assert!(service.list_orders().await.unwrap().is_empty());
        assert!(service.list_deliveries().await.unwrap().is_empty());
        assert!(service.health().is_up());
    }
}
