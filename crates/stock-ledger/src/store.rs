use async_trait::async_trait;
use common::ProductName;
use serde::Serialize;

use crate::Result;

/// Current stock level of a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    /// The product name.
    pub name: ProductName,
    /// Current quantity on hand. Never negative.
    pub quantity: i64,
}

/// Outcome of an accepted stock update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockUpdate {
    /// The product name.
    pub name: ProductName,
    /// Quantity before the update was applied.
    pub old: i64,
    /// Quantity after the update was applied. Never negative.
    pub new: i64,
}

/// Core trait for stock storage backends.
///
/// A stock store tracks one non-negative quantity per product name.
/// Backends must be outwardly indistinguishable for these two operations;
/// callers cannot tell in-memory from relational storage except by
/// latency and failure mode. All implementations must be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Returns the current quantity for a product, 0 if unknown.
    ///
    /// The durable backend materializes unseen products as a zero-quantity
    /// row on first sight; the in-memory backend reads with a default and
    /// does not materialize the missing key.
    async fn check_stock(&self, name: &ProductName) -> Result<StockLevel>;

    /// Applies a signed delta to a product's quantity, atomically per call.
    ///
    /// Rejects with [`StockStoreError::NegativeStock`] if the result would
    /// be negative, leaving the stored value unchanged. No partial writes.
    ///
    /// [`StockStoreError::NegativeStock`]: crate::StockStoreError::NegativeStock
    async fn update_stock(&self, name: &ProductName, delta: i64) -> Result<StockUpdate>;
}

/// Extension trait providing convenience methods for stock stores.
#[async_trait]
pub trait StockStoreExt: StockStore {
    /// Returns just the quantity for a product.
    async fn quantity(&self, name: &ProductName) -> Result<i64> {
        Ok(self.check_stock(name).await?.quantity)
    }
}

// Blanket implementation for all StockStore implementations
impl<T: StockStore + ?Sized> StockStoreExt for T {}
