//! End-to-end workflow tests over the in-memory backends.

use std::sync::Arc;

use audit::{AuditSink, InMemoryAuditSink};
use common::ProductName;
use restock::{MatchPolicy, RestockCoordinator, RestockPolicy, RestockState};
use stock_ledger::{InMemoryStockStore, StockStoreExt};
use supplier::{InMemorySupplierClient, SupplierListing};

fn listing(id: i64, title: &str) -> SupplierListing {
    SupplierListing {
        supplier_id: id,
        title: title.to_string(),
        unit_price: 999.99,
        available_stock: 100,
    }
}

#[tokio::test]
async fn full_restock_run_with_audit_trail() {
    let store = InMemoryStockStore::new();
    let client = InMemorySupplierClient::with_listings(vec![listing(42, "Laptop")]);
    let sink = Arc::new(InMemoryAuditSink::new());
    let coordinator =
        RestockCoordinator::new(store.clone(), client.clone()).with_audit_sink(sink.clone());

    let report = coordinator
        .restock_if_needed(&ProductName::from("Laptop"))
        .await
        .unwrap();

    assert_eq!(report.final_state, RestockState::Done);
    assert_eq!(report.quantity_before, 5);
    assert_eq!(report.quantity_after, Some(20));
    assert_eq!(store.quantity(&"Laptop".into()).await.unwrap(), 20);

    // One audit entry per run, carrying the full operation trail
    let entries = sink.recent(10).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].tools_used,
        vec!["check_stock", "search_supplier", "place_order", "update_stock"]
    );

    // A second run finds stock at target and stops at the check
    let report = coordinator
        .restock_if_needed(&ProductName::from("Laptop"))
        .await
        .unwrap();
    assert_eq!(report.final_state, RestockState::Sufficient);
    assert_eq!(report.quantity_before, 20);

    let entries = sink.recent(10).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].tools_used, vec!["check_stock"]);
}

#[tokio::test]
async fn unknown_product_restocks_from_zero() {
    let store = InMemoryStockStore::empty();
    let client = InMemorySupplierClient::with_listings(vec![listing(7, "Webcam Pro")]);
    let coordinator = RestockCoordinator::new(store.clone(), client.clone());

    let report = coordinator
        .restock_if_needed(&ProductName::from("Webcam"))
        .await
        .unwrap();

    assert_eq!(report.final_state, RestockState::Done);
    assert_eq!(report.quantity_before, 0);
    assert_eq!(report.order.unwrap().quantity, 20);
    assert_eq!(store.quantity(&"Webcam".into()).await.unwrap(), 20);
}

#[tokio::test]
async fn custom_policy_levels_are_honored() {
    let store = InMemoryStockStore::with_products([("Laptop", 30)]);
    let client = InMemorySupplierClient::with_listings(vec![listing(42, "Laptop")]);
    let coordinator = RestockCoordinator::new(store.clone(), client.clone())
        .with_policy(RestockPolicy::new(50, 100));

    let report = coordinator
        .restock_if_needed(&ProductName::from("Laptop"))
        .await
        .unwrap();

    assert_eq!(report.final_state, RestockState::Done);
    assert_eq!(report.order.unwrap().quantity, 70);
    assert_eq!(store.quantity(&"Laptop".into()).await.unwrap(), 100);
}

#[tokio::test]
async fn exact_title_policy_skips_fuzzy_listings() {
    let store = InMemoryStockStore::new();
    let client = InMemorySupplierClient::with_listings(vec![listing(1, "Gaming Laptop")]);
    let coordinator = RestockCoordinator::new(store.clone(), client.clone()).with_policy(
        RestockPolicy {
            match_policy: MatchPolicy::ExactTitle,
            ..RestockPolicy::default()
        },
    );

    let report = coordinator
        .restock_if_needed(&ProductName::from("Laptop"))
        .await
        .unwrap();

    assert_eq!(report.final_state, RestockState::Failed);
    assert_eq!(client.order_count(), 0);
    assert_eq!(store.quantity(&"Laptop".into()).await.unwrap(), 5);
}
