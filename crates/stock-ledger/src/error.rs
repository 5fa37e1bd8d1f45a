use thiserror::Error;

/// Errors that can occur when interacting with the stock store.
#[derive(Debug, Error)]
pub enum StockStoreError {
    /// The requested decrement would drive the quantity below zero.
    /// The stored value is left unchanged.
    #[error("Cannot reduce stock below 0. Current: {current}")]
    NegativeStock { current: i64 },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for stock store operations.
pub type Result<T> = std::result::Result<T, StockStoreError>;
