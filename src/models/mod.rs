#[macro_use]
mod entity;

pub mod audit_log;
pub mod health;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod record;
pub mod supplier;
pub mod user;

pub use audit_log::AuditLog;
pub use entity::{Entity, HealthRule};
pub use health::{HealthStatus, STATUS_UNKNOWN, STATUS_UP};
pub use inventory::InventoryItem;
pub use order::{Order, OrderItem};
pub use payment::{Payment, PaymentTransaction};
pub use record::Record;
pub use supplier::Supplier;
pub use user::UserAccount;
