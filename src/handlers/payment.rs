use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{health_response, list_response};
use crate::error::AppResult;
use crate::models::{HealthStatus, Record};
use crate::services::Payments;

type Service = Arc<dyn Payments>;

pub fn routes(service: Service) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/payments", get(list_payments))
        .route("/payment-methods", get(list_payment_methods))
        .with_state(service)
}

async fn health(State(service): State<Service>) -> (StatusCode, Json<HealthStatus>) {
    health_response(service.health())
}

// ── GET /payments ────────────────────────────────────────────────────────────

async fn list_payments(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_payments().await?;
    Ok(list_response("payments", start, records))
}

// ── GET /payment-methods ─────────────────────────────────────────────────────

async fn list_payment_methods(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let records = service.list_payment_methods().await?;
    Ok(list_response("payment_methods", start, records))
}
