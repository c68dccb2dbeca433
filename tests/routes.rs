use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use commerce_services::{
    build_router, handlers,
    models::{AuditLog, Entity},
    services::{CustomerManagementService, SupplierManagementService},
    AppError, AppResult, ServiceKind, Store, StoreBackend,
};

struct UnavailableStore;

#[async_trait]
impl<E: Entity> Store<E> for UnavailableStore {
    async fn save(&self, _entity: E) -> AppResult<E> {
        Err(AppError::StorageUnavailable("connection refused".into()))
    }

    async fn find_all(&self) -> AppResult<Vec<E>> {
        Err(AppError::StorageUnavailable(String::new()))
    }
}

fn app(service: ServiceKind) -> Router {
    build_router(service, &StoreBackend::Memory)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(value) => {
            let json = Some("application/json");
            send_raw(app, method, uri, json, value.to_string()).await
        }
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    let response = app.oneshot(builder.body(Body::from(body)).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// ── Health ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_service_reports_up() {
    for kind in ServiceKind::ALL {
        let (status, body) = send(app(kind), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK, "{kind}");
        assert_eq!(body["status"], "UP", "{kind}");
        assert!(body["timestamp"].is_string(), "{kind}");
    }
}

// ── Customer ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn creating_an_audit_log_returns_created_with_generated_id() {
    let (status, body) = send(
        app(ServiceKind::Customer),
        Method::POST,
        "/audit-logs",
        Some(json!({
            "operation": "INSERT",
            "table_name": "orders",
            "timestamp": "2024-01-01T00:00:00Z",
            "user_id": "u1",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["operation"], "INSERT");
    assert_eq!(body["table_name"], "orders");
    assert_eq!(body["timestamp"], "2024-01-01T00:00:00Z");
    assert_eq!(body["user_id"], "u1");
    assert!(!body["record_id"].as_str().unwrap().is_empty());

    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["operation", "record_id", "table_name", "timestamp", "user_id"]);
}

#[tokio::test]
async fn audit_log_values_are_stored_as_text() {
    let (status, body) = send(
        app(ServiceKind::Customer),
        Method::POST,
        "/audit-logs",
        Some(json!({ "record_id": 42, "user_id": null, "extra": "ignored" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["record_id"], "42");
    assert_eq!(body["user_id"], "null");
    assert_eq!(body["operation"], Value::Null);
    assert!(body.get("extra").is_none());
}

#[tokio::test]
async fn customer_placeholders_answer_empty() {
    let app = app(ServiceKind::Customer);

    let (status, body) = send(app.clone(), Method::GET, "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(
        app,
        Method::PUT,
        "/customers/221B%20Baker%20Street",
        Some(json!({ "email": "sh@example.test" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn customer_update_accepts_any_body() {
    let cases = [
        (Some("application/json"), "[1,2]"),
        (Some("application/json"), "\"x\""),
        (Some("application/json"), "not json"),
        (Some("text/plain"), "{}"),
        (None, "{}"),
        (None, ""),
    ];

    for (content_type, body) in cases {
        let (status, response) = send_raw(
            app(ServiceKind::Customer),
            Method::PUT,
            "/customers/42",
            content_type,
            body.to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{content_type:?} {body}");
        assert_eq!(response, json!({}), "{content_type:?} {body}");
    }
}

#[tokio::test]
async fn malformed_audit_log_body_uses_error_body() {
    let cases = [
        (Some("application/json"), "[1,2]"),
        (Some("application/json"), "{"),
        (None, "{}"),
    ];

    for (content_type, body) in cases {
        let (status, response) = send_raw(
            app(ServiceKind::Customer),
            Method::POST,
            "/audit-logs",
            content_type,
            body.to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{content_type:?} {body}");
        assert!(response["timestamp"].is_string(), "{content_type:?} {body}");
        assert!(
            !response["message"].as_str().unwrap_or_default().is_empty(),
            "{content_type:?} {body}"
        );
    }
}

#[tokio::test]
async fn storage_failure_becomes_server_error_body() {
    let store: Arc<dyn Store<AuditLog>> = Arc::new(UnavailableStore);
    let service = CustomerManagementService::new(store);
    let app = handlers::customer::routes(Arc::new(service));

    let (status, body) = send(app, Method::POST, "/audit-logs", Some(json!({}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "connection refused");
    assert!(body["timestamp"].is_string());
}

// ── Listings ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn listings_on_an_empty_store_are_empty_arrays() {
    let cases = [
        (ServiceKind::Order, "/orders"),
        (ServiceKind::Order, "/delivery"),
        (ServiceKind::OrderManagement, "/order-items"),
        (ServiceKind::OrderManagement, "/orders"),
        (ServiceKind::Payment, "/payments"),
        (ServiceKind::Payment, "/payment-methods"),
        (ServiceKind::PaymentProcessing, "/payments"),
        (ServiceKind::ProductCatalog, "/inventory"),
        (ServiceKind::ProductCatalog, "/products"),
        (ServiceKind::SupplierManagement, "/suppliers"),
        (ServiceKind::User, "/customers"),
    ];

    for (kind, uri) in cases {
        let (status, body) = send(app(kind), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{kind} {uri}");
        assert_eq!(body, json!([]), "{kind} {uri}");
    }
}

#[tokio::test]
async fn listing_failure_without_message_uses_fallback() {
    let service = SupplierManagementService::new(Arc::new(UnavailableStore));
    let app = handlers::supplier_management::routes(Arc::new(service));

    let (status, body) = send(app, Method::GET, "/suppliers", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Unexpected error");
}

#[tokio::test]
async fn services_only_expose_their_own_routes() {
    let (status, _) = send(app(ServiceKind::User), Method::GET, "/suppliers", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        app(ServiceKind::Order),
        Method::POST,
        "/orders",
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
