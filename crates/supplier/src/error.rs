use thiserror::Error;

/// Errors that can occur when talking to the supplier.
#[derive(Debug, Error)]
pub enum SupplierError {
    /// The supplier endpoint could not be reached, or answered with a
    /// non-success status.
    #[error("Error contacting supplier: {0}")]
    Unreachable(String),

    /// The supplier answered but the response body was not in the
    /// expected shape.
    #[error("Unexpected supplier response: {0}")]
    InvalidResponse(String),

    /// The supplier rejected an order.
    #[error("Order rejected by supplier: {0}")]
    OrderRejected(String),

    /// HTTP client construction or configuration error.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for supplier operations.
pub type Result<T> = std::result::Result<T, SupplierError>;
