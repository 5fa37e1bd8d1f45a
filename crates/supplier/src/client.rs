use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// One product match offered by the supplier, produced per search call.
/// Ephemeral; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierListing {
    /// The supplier's ID for this product.
    pub supplier_id: i64,
    /// Product title as listed in the supplier catalog.
    pub title: String,
    /// Unit price quoted by the supplier.
    pub unit_price: f64,
    /// Units the supplier has available.
    pub available_stock: i64,
}

/// Synchronous confirmation of a placed order. Ephemeral; the caller
/// may record it through the audit sink but the core does not persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// The supplier product the order was placed against.
    pub supplier_id: i64,
    /// Units ordered.
    pub quantity: i64,
    /// Order status as reported by the supplier.
    pub status: String,
    /// Estimated delivery, as reported by the supplier.
    pub eta: String,
}

/// Maximum number of listings returned per search.
pub const MAX_SEARCH_RESULTS: usize = 3;

/// Trait for supplier catalog operations.
///
/// Stateless and best-effort: a failed call is reported, never retried
/// here. Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait SupplierClient: Send + Sync {
    /// Searches the supplier catalog by free text.
    ///
    /// Returns at most [`MAX_SEARCH_RESULTS`] listings in the remote
    /// service's native order. An empty vec is a legitimate "no matches"
    /// outcome, not an error.
    async fn search(&self, query: &str) -> Result<Vec<SupplierListing>>;

    /// Places a purchase order for a listing found via [`search`].
    ///
    /// `quantity` must be positive.
    ///
    /// [`search`]: SupplierClient::search
    async fn place_order(&self, supplier_id: i64, quantity: i64) -> Result<OrderReceipt>;
}
