use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{health_response, list_response};
use crate::error::AppResult;
use crate::models::{HealthStatus, Record};
use crate::services::Orders;

type Service = Arc<dyn Orders>;

pub fn routes(service: Service) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/orders", get(list_orders))
        .route("/delivery", get(list_deliveries))
        .with_state(service)
}

async fn health(State(service): State<Service>) -> (StatusCode, Json<HealthStatus>) {
    health_response(service.health())
}

// ── GET /orders ──────────────────────────────────────────────────────────────

async fn list_orders(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_orders().await?;
    Ok(list_response("orders", start, records))
}

// ── GET /delivery ────────────────────────────────────────────────────────────

async fn list_deliveries(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_deliveries().await?;
    Ok(list_response("deliveries", start, records))
}
