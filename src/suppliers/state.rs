use crate::model::{PageInfo, Supplier, SupplierStatistics};
use crate::store::StoreState;

/// Client-side cache of the supplier collection.
///
/// `suppliers` is the last-fetched page; `active_suppliers` is the
/// derived list the order-analysis dialog picks from. A single error
/// slot holds the latest failure message, overwriting older ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupplierState {
    pub suppliers: Vec<Supplier>,
    pub active_suppliers: Vec<Supplier>,
    pub current_supplier: Option<Supplier>,
    pub categories: Vec<String>,
    pub statistics: Option<SupplierStatistics>,
    pub page: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState for SupplierState {}

impl SupplierState {
    pub fn contains(&self, id: i64) -> bool {
        self.suppliers.iter().any(|s| s.id == id)
    }
}
