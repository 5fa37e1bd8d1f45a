//! Audit history endpoints.

use std::sync::Arc;

use audit::{AuditEntry, DEFAULT_HISTORY_LIMIT, SessionId};
use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use stock_ledger::StockStore;
use supplier::SupplierClient;

use crate::error::ApiError;
use crate::routes::AppState;

/// Hard cap on history page size.
const MAX_HISTORY_LIMIT: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

impl HistoryParams {
    fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT)
    }
}

/// GET /audit — most recent workflow invocations, newest first.
#[tracing::instrument(skip(state))]
pub async fn recent<S, C>(
    State(state): State<Arc<AppState<S, C>>>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<AuditEntry>>, ApiError>
where
    S: StockStore + 'static,
    C: SupplierClient + 'static,
{
    let sink = state
        .audit
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("Audit logging is disabled".to_string()))?;

    let entries = sink.recent(params.limit()).await?;
    Ok(Json(entries))
}

/// GET /audit/:session_id — invocations for one session, newest first.
#[tracing::instrument(skip(state))]
pub async fn for_session<S, C>(
    State(state): State<Arc<AppState<S, C>>>,
    Path(session_id): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<AuditEntry>>, ApiError>
where
    S: StockStore + 'static,
    C: SupplierClient + 'static,
{
    let sink = state
        .audit
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("Audit logging is disabled".to_string()))?;

    let uuid = uuid::Uuid::parse_str(&session_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid session_id: {e}")))?;
    let session_id = SessionId::from_uuid(uuid);

    let entries = sink.for_session(&session_id, params.limit()).await?;
    Ok(Json(entries))
}
