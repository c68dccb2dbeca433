use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{HealthStatus, Record};

#[async_trait]
pub trait Users: Send + Sync {
    fn health(&self) -> HealthStatus;

    async fn list_customers(&self) -> AppResult<Vec<Record>>;
}

#[derive(Debug, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Users for UserService {
    fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }

    async fn list_customers(&self) -> AppResult<Vec<Record>> {
        // Customer lookup has no downstream client yet.
        Ok(Vec::new())
    }
}
