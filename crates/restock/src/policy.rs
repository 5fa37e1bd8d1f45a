//! Restock decision policy.

use common::ProductName;
use serde::{Deserialize, Serialize};
use supplier::SupplierListing;

/// How to choose a supplier listing among search results.
///
/// The first-listing rule is inherited behavior from the system this
/// one replaces; it is configuration rather than a hard-coded branch so
/// it can be tightened without touching the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchPolicy {
    /// Take the first listing returned; ranking is delegated to the
    /// remote service.
    #[default]
    FirstListing,

    /// Require a listing whose title equals the product name exactly.
    ExactTitle,
}

/// Thresholds and selection rules driving the restock decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockPolicy {
    /// Minimum acceptable stock level. A quantity at or above this is
    /// sufficient; only quantities strictly below trigger restocking.
    pub threshold: i64,
    /// Desired post-restock stock level.
    pub target_level: i64,
    /// How to pick a listing from search results.
    pub match_policy: MatchPolicy,
}

impl Default for RestockPolicy {
    fn default() -> Self {
        Self {
            threshold: 10,
            target_level: 20,
            match_policy: MatchPolicy::default(),
        }
    }
}

impl RestockPolicy {
    /// Creates a policy with the given levels and the default match rule.
    pub fn new(threshold: i64, target_level: i64) -> Self {
        Self {
            threshold,
            target_level,
            match_policy: MatchPolicy::default(),
        }
    }

    /// Returns true if the quantity needs no restocking.
    /// The boundary is inclusive: a quantity equal to the threshold is
    /// sufficient.
    pub fn is_sufficient(&self, quantity: i64) -> bool {
        quantity >= self.threshold
    }

    /// How many units to order to reach the target level.
    pub fn order_quantity(&self, quantity: i64) -> i64 {
        self.target_level - quantity
    }

    /// Picks a listing from search results according to the match policy.
    pub fn select_listing<'a>(
        &self,
        name: &ProductName,
        listings: &'a [SupplierListing],
    ) -> Option<&'a SupplierListing> {
        match self.match_policy {
            MatchPolicy::FirstListing => listings.first(),
            MatchPolicy::ExactTitle => listings.iter().find(|l| l.title == name.as_str()),
        }
    }
}
