use thiserror::Error;

/// Errors that can occur when writing to or reading from the audit log.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
