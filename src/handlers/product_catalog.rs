use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{health_response, list_response};
use crate::error::AppResult;
use crate::models::{HealthStatus, Record};
use crate::services::ProductCatalog;

type Service = Arc<dyn ProductCatalog>;

pub fn routes(service: Service) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/inventory", get(list_inventory))
        .route("/products", get(list_products))
        .with_state(service)
}

async fn health(State(service): State<Service>) -> (StatusCode, Json<HealthStatus>) {
    health_response(service.health())
}

// ── GET /inventory ───────────────────────────────────────────────────────────

async fn list_inventory(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_inventory().await?;
    Ok(list_response("inventory", start, records))
}

// ── GET /products ────────────────────────────────────────────────────────────

async fn list_products(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_products().await?;
    Ok(list_response("products", start, records))
}
