//! Supplier catalog client.
//!
//! [`SupplierClient`] covers the two supplier-facing operations the
//! restock workflow needs: free-text catalog search and order
//! placement. [`HttpSupplierClient`] talks to the real search endpoint;
//! [`InMemorySupplierClient`] is the test double.

pub mod client;
pub mod error;
pub mod http;
pub mod memory;

pub use client::{MAX_SEARCH_RESULTS, OrderReceipt, SupplierClient, SupplierListing};
pub use error::{Result, SupplierError};
pub use http::HttpSupplierClient;
pub use memory::InMemorySupplierClient;
