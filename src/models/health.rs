use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_UP: &str = "UP";
pub const STATUS_UNKNOWN: &str = "UNKNOWN";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    /// Any literal status, captured now.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn up() -> Self {
        Self::new(STATUS_UP)
    }

    pub fn unknown() -> Self {
        Self::new(STATUS_UNKNOWN)
    }

    pub fn is_up(&self) -> bool {
        self.status == STATUS_UP
    }
}
