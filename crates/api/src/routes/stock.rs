//! Stock inspection and adjustment endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::ProductName;
use serde::Deserialize;
use stock_ledger::{StockLevel, StockStore, StockUpdate};
use supplier::SupplierClient;

use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct UpdateStockRequest {
    pub delta: i64,
}

/// GET /stock/:name — current quantity, 0 for unknown products.
#[tracing::instrument(skip(state))]
pub async fn get<S, C>(
    State(state): State<Arc<AppState<S, C>>>,
    Path(name): Path<String>,
) -> Result<Json<StockLevel>, ApiError>
where
    S: StockStore + 'static,
    C: SupplierClient + 'static,
{
    let name = ProductName::from(name);
    let level = state.store.check_stock(&name).await?;
    Ok(Json(level))
}

/// POST /stock/:name — apply a signed delta to a product's quantity.
///
/// Responds 409 when the delta would drive the quantity negative; the
/// stored value is unchanged in that case.
#[tracing::instrument(skip(state, req))]
pub async fn update<S, C>(
    State(state): State<Arc<AppState<S, C>>>,
    Path(name): Path<String>,
    Json(req): Json<UpdateStockRequest>,
) -> Result<Json<StockUpdate>, ApiError>
where
    S: StockStore + 'static,
    C: SupplierClient + 'static,
{
    let name = ProductName::from(name);
    let update = state.store.update_stock(&name, req.delta).await?;
    Ok(Json(update))
}
