//! Restock workflow for the inventory system.
//!
//! A run moves through an explicit state machine:
//! check the ledger, stop if stock is sufficient, otherwise search the
//! supplier catalog, place an order for the shortfall to the target
//! level, and reconcile the ledger with the ordered quantity.
//!
//! Failures in search, ordering, or reconciliation end the run in a
//! `Failed` report; they never unwind past the coordinator.

pub mod coordinator;
pub mod error;
pub mod policy;
pub mod report;
pub mod state;
pub mod steps;

pub use coordinator::RestockCoordinator;
pub use error::{RestockError, Result};
pub use policy::{MatchPolicy, RestockPolicy};
pub use report::RestockReport;
pub use state::RestockState;
