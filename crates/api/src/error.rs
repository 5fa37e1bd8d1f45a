//! API error types with HTTP response mapping.

use audit::AuditError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use restock::RestockError;
use stock_ledger::StockStoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Stock store error.
    Store(StockStoreError),
    /// Restock workflow error.
    Restock(RestockError),
    /// Audit log error.
    Audit(AuditError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Store(err) => store_error_to_response(err),
            ApiError::Restock(RestockError::Store(err)) => store_error_to_response(err),
            ApiError::Audit(err) => {
                tracing::error!(error = %err, "audit log unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn store_error_to_response(err: StockStoreError) -> (StatusCode, String) {
    match &err {
        // A rejected decrement is the caller's mistake, not a fault
        StockStoreError::NegativeStock { .. } => (StatusCode::CONFLICT, err.to_string()),
        StockStoreError::Database(_) | StockStoreError::Migration(_) => {
            tracing::error!(error = %err, "stock store unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
    }
}

impl From<StockStoreError> for ApiError {
    fn from(err: StockStoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<RestockError> for ApiError {
    fn from(err: RestockError) -> Self {
        ApiError::Restock(err)
    }
}

impl From<AuditError> for ApiError {
    fn from(err: AuditError) -> Self {
        ApiError::Audit(err)
    }
}
