use crate::model::{CustomOrder, OrderPage};
use crate::store::Intent;

/// Events that can change [`OrderState`](crate::orders::OrderState).
#[derive(Debug, Clone, PartialEq)]
pub enum OrderIntent {
    ListPending,
    ListFulfilled(OrderPage),
    ListRejected(String),

    MyOrdersPending,
    MyOrdersFulfilled(OrderPage),
    MyOrdersRejected(String),

    GetPending,
    GetFulfilled(CustomOrder),
    GetRejected(String),

    Created(CustomOrder),
    Updated(CustomOrder),

    /// Admin priced the order against a supplier.
    Analyzed(CustomOrder),
    /// Customer accepted the final price.
    Confirmed(CustomOrder),
    /// Order left the pipeline; carries the server's updated entity.
    Cancelled(CustomOrder),

    PendingAnalysisFulfilled(Vec<CustomOrder>),
    UrgentFulfilled(Vec<CustomOrder>),

    Failed(String),

    ClearError,
    ClearCurrent,
    SetPage(u32),
}

impl Intent for OrderIntent {}
