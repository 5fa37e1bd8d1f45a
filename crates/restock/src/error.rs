//! Restock workflow error types.

use stock_ledger::StockStoreError;
use thiserror::Error;

/// Errors that escape a restock run without reaching a terminal state.
///
/// Supplier and reconciliation faults are absorbed into a Failed
/// [`RestockReport`]; only a failure to read the initial stock level,
/// before the workflow has anything to report, surfaces as an error.
///
/// [`RestockReport`]: crate::RestockReport
#[derive(Debug, Error)]
pub enum RestockError {
    /// The stock store could not serve the initial read.
    #[error("Stock store error: {0}")]
    Store(#[from] StockStoreError),
}

/// Result type for restock operations.
pub type Result<T> = std::result::Result<T, RestockError>;
