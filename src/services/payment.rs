use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{HealthStatus, Record};

#[async_trait]
pub trait Payments: Send + Sync {
    fn health(&self) -> HealthStatus;

    async fn list_payments(&self) -> AppResult<Vec<Record>>;

    async fn list_payment_methods(&self) -> AppResult<Vec<Record>>;
}

/// Payment service. Gateway integration is not wired, so both listings are
/// placeholders.
#[derive(Debug, Default)]
pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Payments for PaymentService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn list_payments(&self) -> AppResult<Vec<Record>> {
        Ok(Vec::new())
    }

    async fn list_payment_methods(&self) -> AppResult<Vec<Record>> {
        Ok(Vec::new())
    }
}
