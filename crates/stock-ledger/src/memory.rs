use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::ProductName;
use tokio::sync::RwLock;

use crate::{
    Result, StockStoreError,
    store::{StockLevel, StockStore, StockUpdate},
};

/// In-memory stock store.
///
/// Holds quantities in a process-local map and provides the same
/// interface as the PostgreSQL implementation. Unknown products read
/// as 0 without being materialized. The lock guards map integrity
/// only; concurrent updates to the same key from multiple callers are
/// not serialized across calls (lost-update hazard, see crate docs).
#[derive(Clone, Default)]
pub struct InMemoryStockStore {
    products: Arc<RwLock<HashMap<ProductName, i64>>>,
}

impl InMemoryStockStore {
    /// Creates a store seeded with the starter catalog.
    pub fn new() -> Self {
        Self::with_products([("Laptop", 5), ("Smartphone", 20), ("Headphones", 50)])
    }

    /// Creates an empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given products and quantities.
    pub fn with_products<I, N>(products: I) -> Self
    where
        I: IntoIterator<Item = (N, i64)>,
        N: Into<ProductName>,
    {
        let map = products
            .into_iter()
            .map(|(name, quantity)| (name.into(), quantity))
            .collect();
        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the number of materialized products.
    pub async fn product_count(&self) -> usize {
        self.products.read().await.len()
    }
}

#[async_trait]
impl StockStore for InMemoryStockStore {
    async fn check_stock(&self, name: &ProductName) -> Result<StockLevel> {
        let products = self.products.read().await;
        let quantity = products.get(name).copied().unwrap_or(0);
        Ok(StockLevel {
            name: name.clone(),
            quantity,
        })
    }

    async fn update_stock(&self, name: &ProductName, delta: i64) -> Result<StockUpdate> {
        let mut products = self.products.write().await;
        let old = products.get(name).copied().unwrap_or(0);
        let new = old + delta;
        if new < 0 {
            return Err(StockStoreError::NegativeStock { current: old });
        }

        products.insert(name.clone(), new);
        metrics::counter!("stock_updates_total").increment(1);

        Ok(StockUpdate {
            name: name.clone(),
            old,
            new,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StockStoreExt;

    #[tokio::test]
    async fn seeded_catalog_is_readable() {
        let store = InMemoryStockStore::new();
        assert_eq!(store.quantity(&"Laptop".into()).await.unwrap(), 5);
        assert_eq!(store.quantity(&"Smartphone".into()).await.unwrap(), 20);
        assert_eq!(store.quantity(&"Headphones".into()).await.unwrap(), 50);
    }

    #[tokio::test]
    async fn unknown_product_reads_zero_without_materializing() {
        let store = InMemoryStockStore::empty();
        let name = ProductName::from("Webcam");

        let level = store.check_stock(&name).await.unwrap();
        assert_eq!(level.quantity, 0);
        assert_eq!(store.product_count().await, 0);

        // Repeatable
        let level = store.check_stock(&name).await.unwrap();
        assert_eq!(level.quantity, 0);
        assert_eq!(store.product_count().await, 0);
    }

    #[tokio::test]
    async fn update_applies_delta() {
        let store = InMemoryStockStore::new();
        let name = ProductName::from("Laptop");

        let update = store.update_stock(&name, 15).await.unwrap();
        assert_eq!(update.old, 5);
        assert_eq!(update.new, 20);
        assert_eq!(store.quantity(&name).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn update_materializes_unknown_product() {
        let store = InMemoryStockStore::empty();
        let name = ProductName::from("Webcam");

        let update = store.update_stock(&name, 7).await.unwrap();
        assert_eq!(update.old, 0);
        assert_eq!(update.new, 7);
        assert_eq!(store.product_count().await, 1);
    }

    #[tokio::test]
    async fn negative_result_is_rejected_and_state_unchanged() {
        let store = InMemoryStockStore::new();
        let name = ProductName::from("Headphones");

        let err = store.update_stock(&name, -1000).await.unwrap_err();
        assert!(matches!(err, StockStoreError::NegativeStock { current: 50 }));
        assert_eq!(store.quantity(&name).await.unwrap(), 50);
    }

    #[tokio::test]
    async fn decrement_to_exactly_zero_is_accepted() {
        let store = InMemoryStockStore::new();
        let name = ProductName::from("Laptop");

        let update = store.update_stock(&name, -5).await.unwrap();
        assert_eq!(update.new, 0);

        let err = store.update_stock(&name, -1).await.unwrap_err();
        assert!(matches!(err, StockStoreError::NegativeStock { current: 0 }));
    }

    #[tokio::test]
    async fn quantity_stays_non_negative_across_update_sequence() {
        let store = InMemoryStockStore::empty();
        let name = ProductName::from("Cable");

        for delta in [10, -4, -6, -1, 3, -3, -1] {
            match store.update_stock(&name, delta).await {
                Ok(update) => assert!(update.new >= 0),
                Err(StockStoreError::NegativeStock { current }) => {
                    assert_eq!(store.quantity(&name).await.unwrap(), current);
                }
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }

    #[tokio::test]
    async fn product_names_are_case_sensitive() {
        let store = InMemoryStockStore::new();
        assert_eq!(store.quantity(&"laptop".into()).await.unwrap(), 0);
        assert_eq!(store.quantity(&"Laptop".into()).await.unwrap(), 5);
    }
}
