//! Eight small commerce microservices sharing one record-mapping and store
//! facade. The binary runs whichever service `SERVICE_NAME` selects.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod services;

pub use config::{Config, ServiceKind};
pub use db::{MemoryStore, PgStore, Store, StoreBackend};
pub use error::{AppError, AppResult};
pub use handlers::build_router;
