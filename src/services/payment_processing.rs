use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Store;
use crate::error::AppResult;
use crate::models::{HealthStatus, PaymentTransaction, Record};

#[async_trait]
pub trait PaymentProcessing: Send + Sync {
    fn health(&self) -> HealthStatus;

    async fn list_payments(&self) -> AppResult<Vec<Record>>;
}

pub struct PaymentProcessingService {
    payments: Arc<dyn Store<PaymentTransaction>>,
}

impl PaymentProcessingService {
    pub fn new(payments: Arc<dyn Store<PaymentTransaction>>) -> Self {
        Self { payments }
    }
}

#[async_trait]
impl PaymentProcessing for PaymentProcessingService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn list_payments(&self) -> AppResult<Vec<Record>> {
        super::list_all(self.payments.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn payments_are_mapped_with_every_declared_field() {
        let store = MemoryStore::<PaymentTransaction>::new();
        store
            .save(PaymentTransaction {
                amount: Some("19.99".into()),
                payment_status: Some("SETTLED".into()),
                ..PaymentTransaction::default()
            })
            .await
            .unwrap();
        let service = PaymentProcessingService::new(Arc::new(store));

        let payments = service.list_payments().await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].len(), 6);
        assert_eq!(payments[0].get("amount"), Some(Some("19.99")));
        assert!(matches!(payments[0].get("payment_id"), Some(Some(_))));
        assert_eq!(payments[0].get("payment_method"), Some(None));
    }
}
