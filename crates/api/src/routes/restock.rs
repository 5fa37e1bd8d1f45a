//! Restock workflow trigger endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::ProductName;
use restock::RestockReport;
use serde::Deserialize;
use stock_ledger::StockStore;
use supplier::SupplierClient;

use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct RestockRequest {
    pub product_name: String,
}

/// POST /restock — run the restock workflow for one product.
///
/// The report is returned with status 200 even when the run ends in
/// `Failed`; a failed supplier interaction is a workflow outcome, not
/// an HTTP fault. Only an unreadable stock store maps to an error
/// status.
#[tracing::instrument(skip(state, req))]
pub async fn run<S, C>(
    State(state): State<Arc<AppState<S, C>>>,
    Json(req): Json<RestockRequest>,
) -> Result<Json<RestockReport>, ApiError>
where
    S: StockStore + 'static,
    C: SupplierClient + 'static,
{
    let name = ProductName::from(req.product_name);
    let report = state.coordinator.restock_if_needed(&name).await?;
    Ok(Json(report))
}
