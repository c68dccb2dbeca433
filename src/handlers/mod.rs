pub mod customer;
pub mod order;
pub mod order_management;
pub mod payment;
pub mod payment_processing;
pub mod product_catalog;
pub mod supplier_management;
pub mod user;

use std::sync::Arc;
use std::time::Instant;

use axum::{http::StatusCode, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::ServiceKind;
use crate::db::StoreBackend;
use crate::models::{HealthStatus, Record};
use crate::services::{
    CustomerManagementService, OrderManagementService, OrderService, PaymentProcessingService,
    PaymentService, ProductCatalogService, SupplierManagementService, UserService,
};

/// Routes of the selected service, backed by `backend`.
pub fn build_router(service: ServiceKind, backend: &StoreBackend) -> Router {
    let routes = match service {
        ServiceKind::Customer => {
            customer::routes(Arc::new(CustomerManagementService::new(backend.store())))
        }
        ServiceKind::Order => order::routes(Arc::new(OrderService::new())),
        ServiceKind::OrderManagement => {
            order_management::routes(Arc::new(OrderManagementService::new(backend.store())))
        }
        ServiceKind::Payment => payment::routes(Arc::new(PaymentService::new())),
        ServiceKind::PaymentProcessing => {
            payment_processing::routes(Arc::new(PaymentProcessingService::new(backend.store())))
        }
        ServiceKind::ProductCatalog => {
            product_catalog::routes(Arc::new(ProductCatalogService::new(backend.store())))
        }
        ServiceKind::SupplierManagement => {
            supplier_management::routes(Arc::new(SupplierManagementService::new(backend.store())))
        }
        ServiceKind::User => user::routes(Arc::new(UserService::new())),
    };

    routes
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn health_response(health: HealthStatus) -> (StatusCode, Json<HealthStatus>) {
    (StatusCode::OK, Json(health))
}

fn list_response(
    resource: &'static str,
    start: Instant,
    records: Vec<Record>,
) -> (StatusCode, Json<Vec<Record>>) {
    info!(
        resource,
        count = records.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed records"
    );
    (StatusCode::OK, Json(records))
}
