use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use common::SessionId;

use crate::{
    AuditError, Result,
    entry::{AuditEntry, NewAuditEntry},
    sink::AuditSink,
};

#[derive(Debug, Default)]
struct InMemoryAuditState {
    entries: Vec<AuditEntry>,
    next_id: i64,
    fail_on_log: bool,
}

/// In-memory audit sink for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSink {
    state: Arc<RwLock<InMemoryAuditState>>,
}

impl InMemoryAuditSink {
    /// Creates a new empty in-memory audit sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the sink to fail on the next log call.
    pub fn set_fail_on_log(&self, fail: bool) {
        self.state.write().unwrap().fail_on_log = fail;
    }

    /// Returns the number of stored entries.
    pub fn entry_count(&self) -> usize {
        self.state.read().unwrap().entries.len()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn log(&self, entry: NewAuditEntry) -> Result<()> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_log {
            return Err(AuditError::Database(sqlx::Error::PoolTimedOut));
        }

        state.next_id += 1;
        let stored = AuditEntry {
            id: state.next_id,
            session_id: entry.session_id.to_string(),
            user_message: entry.user_message,
            reasoning: entry.reasoning,
            response: entry.response,
            tools_used: entry.tools_used,
            created_at: Utc::now(),
        };
        state.entries.push(stored);
        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AuditEntry>> {
        let state = self.state.read().unwrap();
        let mut entries: Vec<AuditEntry> = state.entries.iter().rev().cloned().collect();
        entries.truncate(limit.max(0) as usize);
        Ok(entries)
    }

    async fn for_session(&self, session_id: &SessionId, limit: i64) -> Result<Vec<AuditEntry>> {
        let wanted = session_id.to_string();
        let state = self.state.read().unwrap();
        let mut entries: Vec<AuditEntry> = state
            .entries
            .iter()
            .rev()
            .filter(|e| e.session_id == wanted)
            .cloned()
            .collect();
        entries.truncate(limit.max(0) as usize);
        Ok(entries)
    }
}
