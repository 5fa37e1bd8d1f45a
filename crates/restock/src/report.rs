//! Terminal payload of a restock run.

use serde::Serialize;
use supplier::OrderReceipt;

use crate::state::RestockState;

/// Structured result every restock run terminates with.
#[derive(Debug, Clone, Serialize)]
pub struct RestockReport {
    /// The terminal state the run reached.
    pub final_state: RestockState,
    /// Quantity read at the start of the run.
    pub quantity_before: i64,
    /// Quantity after reconciliation; absent unless the run reached Done.
    pub quantity_after: Option<i64>,
    /// Receipt of the placed order, if one was placed. Present on Done,
    /// and on the reconciliation-failure path where the order had
    /// already been placed.
    pub order: Option<OrderReceipt>,
    /// Failure description; absent unless the run failed.
    pub error: Option<String>,
}

impl RestockReport {
    /// Stock was at or above the threshold; nothing was ordered.
    pub fn sufficient(quantity_before: i64) -> Self {
        Self {
            final_state: RestockState::Sufficient,
            quantity_before,
            quantity_after: None,
            order: None,
            error: None,
        }
    }

    /// Order placed and ledger reconciled.
    pub fn done(quantity_before: i64, quantity_after: i64, order: OrderReceipt) -> Self {
        Self {
            final_state: RestockState::Done,
            quantity_before,
            quantity_after: Some(quantity_after),
            order: Some(order),
            error: None,
        }
    }

    /// Run failed before any order was placed; inventory unchanged.
    pub fn failed(quantity_before: i64, error: impl Into<String>) -> Self {
        Self {
            final_state: RestockState::Failed,
            quantity_before,
            quantity_after: None,
            order: None,
            error: Some(error.into()),
        }
    }

    /// Reconciliation failed after the order had been placed. The
    /// receipt is carried so the caller can see what was ordered; no
    /// compensating cancellation is attempted.
    pub fn failed_after_order(
        quantity_before: i64,
        order: OrderReceipt,
        error: impl Into<String>,
    ) -> Self {
        Self {
            final_state: RestockState::Failed,
            quantity_before,
            quantity_after: None,
            order: Some(order),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_report_carries_order_and_new_quantity() {
        let order = OrderReceipt {
            supplier_id: 42,
            quantity: 15,
            status: "confirmed".to_string(),
            eta: "2 days".to_string(),
        };
        let report = RestockReport::done(5, 20, order);

        assert_eq!(report.final_state, RestockState::Done);
        assert_eq!(report.quantity_before, 5);
        assert_eq!(report.quantity_after, Some(20));
        assert_eq!(report.order.unwrap().quantity, 15);
        assert!(report.error.is_none());
    }

    #[test]
    fn failed_report_has_no_order_by_default() {
        let report = RestockReport::failed(5, "no matches");
        assert_eq!(report.final_state, RestockState::Failed);
        assert!(report.order.is_none());
        assert_eq!(report.error.as_deref(), Some("no matches"));
    }

    #[test]
    fn report_serializes_with_final_state_string() {
        let report = RestockReport::sufficient(20);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["final_state"], "Sufficient");
        assert_eq!(json["quantity_before"], 20);
        assert!(json["quantity_after"].is_null());
    }
}
