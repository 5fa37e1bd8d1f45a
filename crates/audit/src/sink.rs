use async_trait::async_trait;
use common::SessionId;

use crate::{
    Result,
    entry::{AuditEntry, NewAuditEntry},
};

/// Default page size for history queries.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Trait for append-only audit log implementations.
///
/// The workflow treats the sink as fire-and-forget: a failed append is
/// the caller's problem to log, never to propagate. Reads are for
/// operators and return entries most recent first. Implementations
/// must be thread-safe (Send + Sync).
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Appends one entry to the log.
    async fn log(&self, entry: NewAuditEntry) -> Result<()>;

    /// Returns the most recent entries across all sessions, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<AuditEntry>>;

    /// Returns the most recent entries for one session, newest first.
    async fn for_session(&self, session_id: &SessionId, limit: i64) -> Result<Vec<AuditEntry>>;
}
