use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Store;
use crate::error::AppResult;
use crate::models::{AuditLog, HealthStatus, Record};

#[async_trait]
pub trait CustomerManagement: Send + Sync {
    fn health(&self) -> HealthStatus;

    /// Persists an audit entry, generating `record_id` when absent.
    async fn create_audit_log(&self, body: Record) -> AppResult<Record>;

    async fn list_customers(&self) -> AppResult<Vec<Record>>;

    async fn update_customer(&self, address: &str, body: Record) -> AppResult<Record>;
}

pub struct CustomerManagementService {
    audit_logs: Arc<dyn Store<AuditLog>>,
}

impl CustomerManagementService {
    pub fn new(audit_logs: Arc<dyn Store<AuditLog>>) -> Self {
        Self { audit_logs }
    }
}

#[async_trait]
impl CustomerManagement for CustomerManagementService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn create_audit_log(&self, body: Record) -> AppResult<Record> {
        super::create(self.audit_logs.as_ref(), &body).await
    }

    async fn list_customers(&self) -> AppResult<Vec<Record>> {
        // Customer lookup has no downstream client yet.
        Ok(Vec::new())
    }

    async fn update_customer(&self, _address: &str, _body: Record) -> AppResult<Record> {
        // Customer writes have no backing table yet.
        Ok(Record::new())
    }
}
