//! Restock workflow operation identifiers, as recorded in audit entries.

/// Operation name: read the current stock level.
pub const CHECK_STOCK: &str = "check_stock";

/// Operation name: search the supplier catalog.
pub const SEARCH_SUPPLIER: &str = "search_supplier";

/// Operation name: place a purchase order.
pub const PLACE_ORDER: &str = "place_order";

/// Operation name: apply the ordered quantity to the ledger.
pub const UPDATE_STOCK: &str = "update_stock";
