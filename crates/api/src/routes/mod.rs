pub mod audit;
pub mod health;
pub mod metrics;
pub mod restock;
pub mod stock;

use std::sync::Arc;

use stock_ledger::StockStore;
use supplier::SupplierClient;

/// Shared application state accessible from all handlers.
///
/// Generic over the stock store and supplier client so tests can run
/// the full router against in-memory fakes.
pub struct AppState<S: StockStore, C: SupplierClient> {
    pub store: S,
    pub coordinator: ::restock::RestockCoordinator<S, C>,
    pub audit: Option<Arc<dyn ::audit::AuditSink>>,
}
