use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::{Config, ServiceKind};
use crate::error::AppResult;
use crate::models::Entity;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Minimal persistence facade shared by every service.
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// Upsert by identifier. An unset identifier is generated first; the
    /// returned entity carries it.
    async fn save(&self, entity: E) -> AppResult<E>;

    /// Snapshot of every row in the store's natural order.
    async fn find_all(&self) -> AppResult<Vec<E>>;
}

/// Where the running service keeps its rows.
#[derive(Clone)]
pub enum StoreBackend {
    Postgres(PgPool),
    Memory,
}

impl StoreBackend {
    pub fn store<E: Entity>(&self) -> Arc<dyn Store<E>> {
        match self {
            StoreBackend::Postgres(pool) => Arc::new(PgStore::<E>::new(pool.clone())),
            StoreBackend::Memory => Arc::new(MemoryStore::<E>::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Postgres(_) => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

pub async fn connect(config: &Config, database_url: &str) -> anyhow::Result<PgPool> {
    info!(max_connections = config.db_max_connections, "Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(database_url)
        .await?;
    info!("Database connection pool established.");
    Ok(pool)
}

/// Applies the embedded migrations owned by `service`.
pub async fn migrate(pool: &PgPool, service: ServiceKind) -> anyhow::Result<()> {
    info!(service = %service, "Running migrations...");
    match service {
        ServiceKind::Customer => sqlx::migrate!("./migrations/customer").run(pool).await?,
        ServiceKind::OrderManagement => {
            sqlx::migrate!("./migrations/order-management").run(pool).await?
        }
        ServiceKind::PaymentProcessing => {
            sqlx::migrate!("./migrations/payment-processing").run(pool).await?
        }
        ServiceKind::ProductCatalog => {
            sqlx::migrate!("./migrations/product-catalog").run(pool).await?
        }
        ServiceKind::SupplierManagement => {
            sqlx::migrate!("./migrations/supplier-management").run(pool).await?
        }
        ServiceKind::Order | ServiceKind::Payment | ServiceKind::User => {
            info!(service = %service, "No tables owned, skipping migrations.");
            return Ok(());
        }
    }
    info!("Migrations complete.");
    Ok(())
}
