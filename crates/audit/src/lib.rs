//! Append-only audit log of workflow invocations.
//!
//! The [`AuditSink`] trait records what each workflow run was asked to
//! do, what it answered, and which operations it used. The workflow
//! notifies the sink fire-and-forget; logging failures never alter a
//! run's own result. History is queryable by session and by recency.

pub mod entry;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod sink;

pub use common::SessionId;
pub use entry::{AuditEntry, NewAuditEntry};
pub use error::{AuditError, Result};
pub use memory::InMemoryAuditSink;
pub use postgres::PostgresAuditSink;
pub use sink::{AuditSink, DEFAULT_HISTORY_LIMIT};
