use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{
    Result, SupplierError,
    client::{MAX_SEARCH_RESULTS, OrderReceipt, SupplierClient, SupplierListing},
};

#[derive(Debug, Default)]
struct InMemorySupplierState {
    listings: Vec<SupplierListing>,
    fail_on_search: bool,
    fail_on_order: bool,
    search_calls: u32,
    order_calls: u32,
    placed_orders: Vec<(i64, i64)>,
}

/// In-memory supplier client for testing.
///
/// Serves a configurable set of listings and records every call so
/// tests can assert which operations ran.
#[derive(Debug, Clone, Default)]
pub struct InMemorySupplierClient {
    state: Arc<RwLock<InMemorySupplierState>>,
}

impl InMemorySupplierClient {
    /// Creates a client with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client serving the given listings.
    pub fn with_listings(listings: Vec<SupplierListing>) -> Self {
        let client = Self::default();
        client.set_listings(listings);
        client
    }

    /// Replaces the catalog served by search.
    pub fn set_listings(&self, listings: Vec<SupplierListing>) {
        self.state.write().unwrap().listings = listings;
    }

    /// Configures the client to fail search calls.
    pub fn set_fail_on_search(&self, fail: bool) {
        self.state.write().unwrap().fail_on_search = fail;
    }

    /// Configures the client to reject order placement.
    pub fn set_fail_on_order(&self, fail: bool) {
        self.state.write().unwrap().fail_on_order = fail;
    }

    /// Returns how many searches were issued.
    pub fn search_count(&self) -> u32 {
        self.state.read().unwrap().search_calls
    }

    /// Returns how many orders were placed (attempted).
    pub fn order_count(&self) -> u32 {
        self.state.read().unwrap().order_calls
    }

    /// Returns the (supplier_id, quantity) pairs of confirmed orders.
    pub fn placed_orders(&self) -> Vec<(i64, i64)> {
        self.state.read().unwrap().placed_orders.clone()
    }
}

#[async_trait]
impl SupplierClient for InMemorySupplierClient {
    async fn search(&self, query: &str) -> Result<Vec<SupplierListing>> {
        let mut state = self.state.write().unwrap();
        state.search_calls += 1;

        if state.fail_on_search {
            return Err(SupplierError::Unreachable(
                "connection refused".to_string(),
            ));
        }

        let query_lower = query.to_lowercase();
        let matches: Vec<SupplierListing> = state
            .listings
            .iter()
            .filter(|l| l.title.to_lowercase().contains(&query_lower))
            .take(MAX_SEARCH_RESULTS)
            .cloned()
            .collect();

        Ok(matches)
    }

    async fn place_order(&self, supplier_id: i64, quantity: i64) -> Result<OrderReceipt> {
        let mut state = self.state.write().unwrap();
        state.order_calls += 1;

        if state.fail_on_order {
            return Err(SupplierError::OrderRejected(
                "supplier declined the order".to_string(),
            ));
        }
        if quantity <= 0 {
            return Err(SupplierError::OrderRejected(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        state.placed_orders.push((supplier_id, quantity));
        Ok(OrderReceipt {
            supplier_id,
            quantity,
            status: "confirmed".to_string(),
            eta: "2 days".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, title: &str) -> SupplierListing {
        SupplierListing {
            supplier_id: id,
            title: title.to_string(),
            unit_price: 99.99,
            available_stock: 100,
        }
    }

    #[tokio::test]
    async fn search_filters_by_title_substring() {
        let client = InMemorySupplierClient::with_listings(vec![
            listing(1, "Laptop Pro"),
            listing(2, "Gaming Laptop"),
            listing(3, "Headphones"),
        ]);

        let results = client.search("laptop").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(client.search_count(), 1);
    }

    #[tokio::test]
    async fn search_caps_results_at_three() {
        let client = InMemorySupplierClient::with_listings(vec![
            listing(1, "Laptop A"),
            listing(2, "Laptop B"),
            listing(3, "Laptop C"),
            listing(4, "Laptop D"),
        ]);

        let results = client.search("Laptop").await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].supplier_id, 1);
    }

    #[tokio::test]
    async fn empty_catalog_returns_no_matches_not_error() {
        let client = InMemorySupplierClient::new();
        let results = client.search("Laptop").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn fail_on_search_reports_unreachable() {
        let client = InMemorySupplierClient::new();
        client.set_fail_on_search(true);

        let err = client.search("Laptop").await.unwrap_err();
        assert!(matches!(err, SupplierError::Unreachable(_)));
        assert_eq!(client.search_count(), 1);
    }

    #[tokio::test]
    async fn place_order_records_confirmed_orders() {
        let client = InMemorySupplierClient::new();
        let receipt = client.place_order(42, 15).await.unwrap();
        assert_eq!(receipt.status, "confirmed");
        assert_eq!(client.placed_orders(), vec![(42, 15)]);
    }

    #[tokio::test]
    async fn fail_on_order_rejects_and_records_nothing() {
        let client = InMemorySupplierClient::new();
        client.set_fail_on_order(true);

        let err = client.place_order(42, 15).await.unwrap_err();
        assert!(matches!(err, SupplierError::OrderRejected(_)));
        assert_eq!(client.order_count(), 1);
        assert!(client.placed_orders().is_empty());
    }
}
