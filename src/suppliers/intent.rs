use crate::model::{Supplier, SupplierPage, SupplierStatistics};
use crate::store::Intent;

/// Events that can change [`SupplierState`](crate::suppliers::SupplierState).
///
/// Fetches come as Pending/Fulfilled/Rejected triples; mutation
/// completions carry the server's entity and never touch the loading
/// flag. `Failed` records a mutation error without touching collections.
#[derive(Debug, Clone, PartialEq)]
pub enum SupplierIntent {
    ListPending,
    ListFulfilled(SupplierPage),
    ListRejected(String),

    ActiveListFulfilled(Vec<Supplier>),

    GetPending,
    GetFulfilled(Supplier),
    GetRejected(String),

    Created(Supplier),
    Updated(Supplier),
    Transitioned(Supplier),
    Deleted(i64),

    CategoriesFulfilled(Vec<String>),
    StatisticsFulfilled(SupplierStatistics),

    Failed(String),

    ClearError,
    ClearCurrent,
    SetPage(u32),
}

impl Intent for SupplierIntent {}
