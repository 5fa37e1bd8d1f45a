//! Restock workflow state machine.

use serde::{Deserialize, Serialize};

/// The state of a restock run in its lifecycle.
///
/// State transitions:
/// ```text
/// Idle ──► Checking ──┬──► Sufficient
///                     └──► Searching ──► Ordering ──► Reconciling ──► Done
///                              │             │             │
///                              └─────────────┴─────────────┴──► Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RestockState {
    /// No run in progress.
    #[default]
    Idle,

    /// Reading the current stock level.
    Checking,

    /// Stock is at or above the threshold; nothing to do (terminal state).
    Sufficient,

    /// Searching the supplier catalog for a match.
    Searching,

    /// Placing the order with the supplier.
    Ordering,

    /// Applying the ordered quantity back to the ledger.
    Reconciling,

    /// Order placed and ledger reconciled (terminal state).
    Done,

    /// Search, order, or reconciliation failed (terminal state).
    Failed,
}

impl RestockState {
    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RestockState::Sufficient | RestockState::Done | RestockState::Failed
        )
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RestockState::Idle => "Idle",
            RestockState::Checking => "Checking",
            RestockState::Sufficient => "Sufficient",
            RestockState::Searching => "Searching",
            RestockState::Ordering => "Ordering",
            RestockState::Reconciling => "Reconciling",
            RestockState::Done => "Done",
            RestockState::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for RestockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
