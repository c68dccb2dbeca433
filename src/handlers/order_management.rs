use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{health_response, list_response};
use crate::error::AppResult;
use crate::models::{HealthStatus, Record};
use crate::services::OrderManagement;

type Service = Arc<dyn OrderManagement>;

pub fn routes(service: Service) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/order-items", get(list_order_items))
        .route("/orders", get(list_orders))
        .with_state(service)
}

async fn health(State(service): State<Service>) -> (StatusCode, Json<HealthStatus>) {
    health_response(service.health())
}

// ── GET /order-items ─────────────────────────────────────────────────────────

async fn list_order_items(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_order_items().await?;
    Ok(list_response("order_items", start, records))
}

// ── GET /orders ──────────────────────────────────────────────────────────────

async fn list_orders(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_orders().await?;
    Ok(list_response("orders", start, records))
}
