//! Supplier resource store: state, intents, reducer, and actions.

mod actions;
mod intent;
mod reducer;
mod state;

pub use actions::{
    create_supplier, delete_supplier, fetch_active_suppliers, fetch_supplier,
    fetch_supplier_categories, fetch_supplier_statistics, fetch_suppliers, transition_supplier,
    update_supplier,
};
pub use intent::SupplierIntent;
pub use reducer::SupplierReducer;
pub use state::SupplierState;

/// Store alias used by views and actions.
pub type SupplierStore = crate::store::Store<SupplierReducer>;
