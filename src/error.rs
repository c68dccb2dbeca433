use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;
use tracing::error;

/// Message used when an error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Unexpected error";

#[derive(Debug, Error)]
pub enum AppError {
    /// The backing store could not be reached or rejected the statement.
    #[error("{0}")]
    StorageUnavailable(String),

    /// The request body could not be read as a JSON object.
    #[error("{0}")]
    MalformedBody(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StorageUnavailable(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::StorageUnavailable(_) | AppError::MalformedBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message();
        error!(error = %message, "Request failed");

        (
            self.status(),
            Json(serde_json::json!({
                "timestamp": Utc::now().to_rfc3339(),
                "message": message,
            })),
        )
            .into_response()
    }
}
