//! Coordinator driving the restock workflow.

use std::sync::Arc;

use audit::{AuditSink, NewAuditEntry, SessionId};
use common::ProductName;
use stock_ledger::StockStore;
use supplier::SupplierClient;

use crate::error::RestockError;
use crate::policy::RestockPolicy;
use crate::report::RestockReport;
use crate::state::RestockState;
use crate::steps;

/// Orchestrates a single restock run: inspect the ledger, decide
/// against the threshold, search the supplier, place an order, and
/// reconcile the ledger.
///
/// Operations within one run are strictly sequential; there is no
/// concurrent fan-out and no automatic retry. A single failed supplier
/// call ends the run in `Failed`. When reconciliation fails after an
/// order was placed, the run reports `Failed` with the receipt attached
/// and takes no compensating action against the remote order.
pub struct RestockCoordinator<S, C>
where
    S: StockStore,
    C: SupplierClient,
{
    store: S,
    supplier: C,
    policy: RestockPolicy,
    audit: Option<Arc<dyn AuditSink>>,
}

impl<S, C> RestockCoordinator<S, C>
where
    S: StockStore,
    C: SupplierClient,
{
    /// Creates a coordinator with the default policy and no audit sink.
    pub fn new(store: S, supplier: C) -> Self {
        Self {
            store,
            supplier,
            policy: RestockPolicy::default(),
            audit: None,
        }
    }

    /// Overrides the restock policy.
    pub fn with_policy(mut self, policy: RestockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attaches a fire-and-forget audit sink. Logging failures are
    /// recorded at warn level and never alter a run's report.
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Returns the active policy.
    pub fn policy(&self) -> &RestockPolicy {
        &self.policy
    }

    /// Runs the restock workflow for one product.
    ///
    /// Always reaches a terminal state (`Sufficient`, `Done`, or
    /// `Failed`) unless the initial stock read itself fails, which
    /// surfaces as [`RestockError::Store`].
    #[tracing::instrument(skip(self), fields(product = %name))]
    pub async fn restock_if_needed(
        &self,
        name: &ProductName,
    ) -> Result<RestockReport, RestockError> {
        metrics::counter!("restock_runs_total").increment(1);
        let run_start = std::time::Instant::now();
        let session_id = SessionId::new();
        let mut tools_used = vec![steps::CHECK_STOCK.to_string()];

        // Checking
        let level = match self.store.check_stock(name).await {
            Ok(level) => level,
            Err(e) => {
                metrics::counter!("restock_failed").increment(1);
                self.audit_run(session_id, name, tools_used, format!("Stock check failed: {e}"))
                    .await;
                return Err(e.into());
            }
        };
        let before = level.quantity;

        if self.policy.is_sufficient(before) {
            tracing::info!(quantity = before, "stock sufficient, no restock needed");
            let report = RestockReport::sufficient(before);
            self.finish(session_id, name, tools_used, &report, run_start)
                .await;
            return Ok(report);
        }

        // Searching
        tracing::info!(
            quantity = before,
            threshold = self.policy.threshold,
            "stock below threshold, searching supplier"
        );
        tools_used.push(steps::SEARCH_SUPPLIER.to_string());

        let listings = match self.supplier.search(name.as_str()).await {
            Ok(listings) => listings,
            Err(e) => {
                let report =
                    RestockReport::failed(before, format!("Supplier search failed: {e}"));
                self.finish(session_id, name, tools_used, &report, run_start)
                    .await;
                return Ok(report);
            }
        };

        let Some(listing) = self.policy.select_listing(name, &listings) else {
            let report = RestockReport::failed(
                before,
                format!("No products found for '{name}' at supplier"),
            );
            self.finish(session_id, name, tools_used, &report, run_start)
                .await;
            return Ok(report);
        };

        // Ordering
        let order_quantity = self.policy.order_quantity(before);
        tracing::info!(
            supplier_id = listing.supplier_id,
            title = %listing.title,
            order_quantity,
            "placing supplier order"
        );
        tools_used.push(steps::PLACE_ORDER.to_string());

        let receipt = match self
            .supplier
            .place_order(listing.supplier_id, order_quantity)
            .await
        {
            Ok(receipt) => receipt,
            Err(e) => {
                let report = RestockReport::failed(before, format!("Order failed: {e}"));
                self.finish(session_id, name, tools_used, &report, run_start)
                    .await;
                return Ok(report);
            }
        };

        // Reconciling
        tools_used.push(steps::UPDATE_STOCK.to_string());

        let report = match self.store.update_stock(name, order_quantity).await {
            Ok(update) => RestockReport::done(update.old, update.new, receipt),
            Err(e) => RestockReport::failed_after_order(
                before,
                receipt,
                format!("Reconciliation failed after order placement: {e}"),
            ),
        };

        self.finish(session_id, name, tools_used, &report, run_start)
            .await;
        Ok(report)
    }

    /// Records metrics for a terminal report and notifies the audit sink.
    async fn finish(
        &self,
        session_id: SessionId,
        name: &ProductName,
        tools_used: Vec<String>,
        report: &RestockReport,
        run_start: std::time::Instant,
    ) {
        let duration = run_start.elapsed().as_secs_f64();
        metrics::histogram!("restock_duration_seconds").record(duration);
        match report.final_state {
            RestockState::Failed => {
                metrics::counter!("restock_failed").increment(1);
                tracing::warn!(
                    reason = report.error.as_deref().unwrap_or("unknown"),
                    "restock run failed"
                );
            }
            _ => {
                metrics::counter!("restock_completed").increment(1);
                tracing::info!(state = %report.final_state, duration, "restock run finished");
            }
        }

        let response = serde_json::to_string(report)
            .unwrap_or_else(|_| report.final_state.to_string());
        self.audit_run(session_id, name, tools_used, response).await;
    }

    async fn audit_run(
        &self,
        session_id: SessionId,
        name: &ProductName,
        tools_used: Vec<String>,
        response: String,
    ) {
        let Some(sink) = &self.audit else {
            return;
        };

        let entry = NewAuditEntry::new(session_id, format!("restock_if_needed({name})"))
            .with_response(response)
            .with_tools_used(tools_used);

        if let Err(e) = sink.log(entry).await {
            tracing::warn!(error = %e, "audit logging failed");
        }
    }
}
