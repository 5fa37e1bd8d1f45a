use chrono::{DateTime, Utc};
use common::SessionId;
use serde::{Deserialize, Serialize};

/// An audit record as stored, keyed by auto-increment id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Auto-increment primary key.
    pub id: i64,
    /// The workflow invocation this entry belongs to.
    pub session_id: String,
    /// What the caller asked for.
    pub user_message: String,
    /// Optional free-text reasoning captured for the run.
    pub reasoning: Option<String>,
    /// Optional response/outcome summary for the run.
    pub response: Option<String>,
    /// Operations that ran, in invocation order.
    pub tools_used: Vec<String>,
    /// When the entry was appended.
    pub created_at: DateTime<Utc>,
}

/// An audit record about to be appended.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub session_id: SessionId,
    pub user_message: String,
    pub reasoning: Option<String>,
    pub response: Option<String>,
    pub tools_used: Vec<String>,
}

impl NewAuditEntry {
    /// Creates an entry with just the required fields.
    pub fn new(session_id: SessionId, user_message: impl Into<String>) -> Self {
        Self {
            session_id,
            user_message: user_message.into(),
            reasoning: None,
            response: None,
            tools_used: Vec::new(),
        }
    }

    /// Attaches reasoning text.
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    /// Attaches a response summary.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Attaches the ordered list of operations that ran.
    pub fn with_tools_used(mut self, tools_used: Vec<String>) -> Self {
        self.tools_used = tools_used;
        self
    }
}

/// Joins tool names into the stored TEXT column format.
pub(crate) fn join_tools(tools: &[String]) -> Option<String> {
    if tools.is_empty() {
        None
    } else {
        Some(tools.join(", "))
    }
}

/// Splits the stored TEXT column back into tool names.
pub(crate) fn split_tools(stored: Option<String>) -> Vec<String> {
    stored
        .map(|s| s.split(", ").map(str::to_string).collect())
        .unwrap_or_default()
}
