//! HTTP API server with observability for the inventory system.
//!
//! Exposes stock inspection/adjustment and the restock workflow over
//! REST, with structured logging (tracing) and Prometheus metrics.
//! This crate is the composition root: the storage backend is selected
//! once at startup and injected into the router state.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use audit::AuditSink;
use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use restock::{RestockCoordinator, RestockPolicy};
use stock_ledger::StockStore;
use supplier::SupplierClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, C>(state: Arc<AppState<S, C>>, metrics_handle: PrometheusHandle) -> Router
where
    S: StockStore + 'static,
    C: SupplierClient + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/stock/{name}", get(routes::stock::get::<S, C>))
        .route("/stock/{name}", post(routes::stock::update::<S, C>))
        .route("/restock", post(routes::restock::run::<S, C>))
        .route("/audit", get(routes::audit::recent::<S, C>))
        .route(
            "/audit/{session_id}",
            get(routes::audit::for_session::<S, C>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a store and supplier client.
///
/// The same audit sink, when present, serves both the coordinator's
/// fire-and-forget notifications and the history endpoints.
pub fn create_state<S, C>(
    store: S,
    supplier: C,
    policy: RestockPolicy,
    audit: Option<Arc<dyn AuditSink>>,
) -> Arc<AppState<S, C>>
where
    S: StockStore + Clone + 'static,
    C: SupplierClient + 'static,
{
    let mut coordinator = RestockCoordinator::new(store.clone(), supplier).with_policy(policy);
    if let Some(sink) = audit.clone() {
        coordinator = coordinator.with_audit_sink(sink);
    }

    Arc::new(AppState {
        store,
        coordinator,
        audit,
    })
}
