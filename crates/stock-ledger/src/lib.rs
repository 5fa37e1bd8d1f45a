//! Per-product stock ledger with interchangeable storage backends.
//!
//! The [`StockStore`] trait is the ledger's whole contract: an atomic
//! read ([`StockStore::check_stock`]) and an atomic delta update
//! ([`StockStore::update_stock`]) that rejects anything driving a
//! quantity negative. Two backends implement it:
//!
//! - [`InMemoryStockStore`] — transient, process-local map
//! - [`PostgresStockStore`] — durable, one transaction per call
//!
//! Backend selection is made once at process start and injected into
//! callers; nothing here supports switching backends mid-process.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::ProductName;
pub use error::{Result, StockStoreError};
pub use memory::InMemoryStockStore;
pub use postgres::PostgresStockStore;
pub use store::{StockLevel, StockStore, StockStoreExt, StockUpdate};
