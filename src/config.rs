use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;

/// The eight services this binary can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Customer,
    Order,
    OrderManagement,
    Payment,
    PaymentProcessing,
    ProductCatalog,
    SupplierManagement,
    User,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 8] = [
        ServiceKind::Customer,
        ServiceKind::Order,
        ServiceKind::OrderManagement,
        ServiceKind::Payment,
        ServiceKind::PaymentProcessing,
        ServiceKind::ProductCatalog,
        ServiceKind::SupplierManagement,
        ServiceKind::User,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Customer => "customer",
            ServiceKind::Order => "order",
            ServiceKind::OrderManagement => "order-management",
            ServiceKind::Payment => "payment",
            ServiceKind::PaymentProcessing => "payment-processing",
            ServiceKind::ProductCatalog => "product-catalog",
            ServiceKind::SupplierManagement => "supplier-management",
            ServiceKind::User => "user",
        }
    }

    /// Whether any operation of this service reads or writes a table.
    pub fn uses_store(self) -> bool {
        matches!(
            self,
            ServiceKind::Customer
                | ServiceKind::OrderManagement
                | ServiceKind::PaymentProcessing
                | ServiceKind::ProductCatalog
                | ServiceKind::SupplierManagement
        )
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown service {name:?}, expected one of: {}", expected())]
pub struct UnknownService {
    pub name: String,
}

fn expected() -> String {
    ServiceKind::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for ServiceKind {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ServiceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| UnknownService { name: s.to_string() })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceKind,
    /// Absent means rows live in process memory only.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            service: std::env::var("SERVICE_NAME")
                .context("SERVICE_NAME must be set")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
