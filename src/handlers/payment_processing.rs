use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{health_response, list_response};
use crate::error::AppResult;
use crate::models::{HealthStatus, Record};
use crate::services::PaymentProcessing;

type Service = Arc<dyn PaymentProcessing>;

pub fn routes(service: Service) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/payments", get(list_payments))
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
