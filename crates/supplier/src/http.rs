use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    Result, SupplierError,
    client::{MAX_SEARCH_RESULTS, OrderReceipt, SupplierClient, SupplierListing},
};

/// Default per-request timeout for supplier calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Wire format of the supplier search endpoint:
/// `GET <base>/products/search?q=<query>`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    products: Vec<WireListing>,
}

#[derive(Debug, Deserialize)]
struct WireListing {
    id: i64,
    title: String,
    price: f64,
    stock: i64,
}

/// HTTP client for the external supplier catalog.
///
/// Search issues a real network call against the configured base URL.
/// Order placement is a deterministic mock that always confirms with a
/// fixed 2-day ETA; a real integration would POST to the supplier with
/// its own timeout and retry policy.
#[derive(Clone)]
pub struct HttpSupplierClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSupplierClient {
    /// Creates a client with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SupplierClient for HttpSupplierClient {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<SupplierListing>> {
        let url = format!("{}/products/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SupplierError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SupplierError::Unreachable(format!(
                "supplier answered with status {status}"
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SupplierError::InvalidResponse(e.to_string()))?;

        let listings: Vec<SupplierListing> = body
            .products
            .into_iter()
            .take(MAX_SEARCH_RESULTS)
            .map(|p| SupplierListing {
                supplier_id: p.id,
                title: p.title,
                unit_price: p.price,
                available_stock: p.stock,
            })
            .collect();

        tracing::debug!(query, count = listings.len(), "supplier search completed");
        Ok(listings)
    }

    #[tracing::instrument(skip(self))]
    async fn place_order(&self, supplier_id: i64, quantity: i64) -> Result<OrderReceipt> {
        if quantity <= 0 {
            return Err(SupplierError::OrderRejected(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        // Mock seam: no network call is made for order placement.
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

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpSupplierClient::new("https://dummyjson.com/").unwrap();
        assert_eq!(client.base_url(), "https://dummyjson.com");
    }

    #[test]
    fn search_response_decodes_expected_wire_shape() {
        let body = serde_json::json!({
            "products": [
                {"id": 42, "title": "Laptop Pro", "price": 999.99, "stock": 100, "brand": "Acme"}
            ],
            "total": 1
        });
        let parsed: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.products.len(), 1);
        assert_eq!(parsed.products[0].id, 42);
        assert_eq!(parsed.products[0].stock, 100);
    }

    #[test]
    fn search_response_missing_products_field_is_an_error() {
        let body = serde_json::json!({"results": []});
        assert!(serde_json::from_value::<SearchResponse>(body).is_err());
    }

    #[tokio::test]
    async fn place_order_confirms_with_fixed_eta() {
        let client = HttpSupplierClient::new("https://dummyjson.com").unwrap();
        let receipt = client.place_order(42, 15).await.unwrap();
        assert_eq!(receipt.supplier_id, 42);
        assert_eq!(receipt.quantity, 15);
        assert_eq!(receipt.status, "confirmed");
        assert_eq!(receipt.eta, "2 days");
    }

    #[tokio::test]
    async fn place_order_rejects_non_positive_quantity() {
        let client = HttpSupplierClient::new("https://dummyjson.com").unwrap();
        let err = client.place_order(42, 0).await.unwrap_err();
        assert!(matches!(err, SupplierError::OrderRejected(_)));
    }

    #[tokio::test]
    async fn search_against_unreachable_host_reports_unreachable() {
        // Reserved TEST-NET-1 address; connection will fail fast.
        let client =
            HttpSupplierClient::with_timeout("http://192.0.2.1:9", Duration::from_millis(200))
                .unwrap();
        let err = client.search("Laptop").await.unwrap_err();
        assert!(matches!(err, SupplierError::Unreachable(_)));
    }
}
