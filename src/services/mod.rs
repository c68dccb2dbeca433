//! One trait per service plus its single implementation. Store-backed
//! operations make exactly one store call wrapped by one mapper call; the rest
//! are placeholders that answer with an empty collection or record.

use crate::db::Store;
use crate::error::AppResult;
use crate::mapper;
use crate::models::{Entity, Record};

pub mod customer;
pub mod order;
pub mod order_management;
pub mod payment;
pub mod payment_processing;
pub mod product_catalog;
pub mod supplier_management;
pub mod user;

pub use customer::{CustomerManagement, CustomerManagementService};
pub use order::{OrderService, Orders};
pub use order_management::{OrderManagement, OrderManagementService};
pub use payment::{PaymentService, Payments};
pub use payment_processing::{PaymentProcessing, PaymentProcessingService};
pub use product_catalog::{ProductCatalog, ProductCatalogService};
pub use supplier_management::{SupplierManagement, SupplierManagementService};
pub use user::{UserService, Users};

async fn list_all<E: Entity>(store: &dyn Store<E>) -> AppResult<Vec<Record>> {
    let rows = store.find_all().await?;
    Ok(rows.iter().map(|row| mapper::to_record(Some(row))).collect())
}

async fn create<E: Entity>(store: &dyn Store<E>, body: &Record) -> AppResult<Record> {
    let entity: E = mapper::from_record(Some(body));
    let saved = store.save(entity).await?;
    Ok(mapper::to_record(Some(&saved)))
}
