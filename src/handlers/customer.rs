use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::info;

use super::{health_response, list_response};
use crate::error::AppResult;
use crate::models::{HealthStatus, Record};
use crate::services::CustomerManagement;

type Service = Arc<dyn CustomerManagement>;

pub fn routes(service: Service) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/audit-logs", post(create_audit_log))
        .route("/customers", get(list_customers))
        .route("/customers/:address", put(update_customer))
        .with_state(service)
}

async fn health(State(service): State<Service>) -> (StatusCode, Json<HealthStatus>) {
    health_response(service.health())
}

// ── POST /audit-logs ─────────────────────────────────────────────────────────

async fn create_audit_log(
    State(service): State<Service>,
    body: Result<Json<Record>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let start = Instant::now();
    let Json(body) = body?;
    let saved = service.create_audit_log(body).await?;

    info!(
        record_id = saved.get("record_id").flatten().unwrap_or_default(),
        elapsed_ms = start.elapsed().as_millis(),
        "Created audit log"
    );

    Ok((StatusCode::CREATED, Json(saved)))
}

// ── GET /customers ───────────────────────────────────────────────────────────

async fn list_customers(
    State(service): State<Service>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let customers = service.list_customers().await?;
    Ok(list_response("customers", start, customers))
}

// ── PUT /customers/:address ──────────────────────────────────────────────────

async fn update_customer(
    State(service): State<Service>,
    Path(address): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Record>)> {
    // Any payload is accepted; only a JSON object carries fields through.
    let body = serde_json::from_slice::<Record>(&body).unwrap_or_default();
    let updated = service.update_customer(&address, body).await?;
    info!(address = %address, "Updated customer");
    Ok((StatusCode::OK, Json(updated)))
}
