//! Wire-format types for the Nosso Closet REST API.
//!
//! Everything here mirrors what the server sends; denormalized counts,
//! audit fields, and convenience flags are server-computed and only
//! displayed client-side.

mod order;
mod page;
mod supplier;

pub use order::{
    ClientSummary, CollectiveOrderSummary, CustomOrder, CustomOrderFilters, CustomOrderRequest,
    OrderAnalysis, OrderPage, OrderStatus, SupplierSummary, Urgency,
};
pub use page::PageInfo;
pub use supplier::{
    Supplier, SupplierFilters, SupplierPage, SupplierRequest, SupplierStatistics, SupplierStatus,
    SupplierTransition,
};

/// Badge color a status chip renders with.
///
/// Matches the palette names the admin tables use, so the mapping from
/// status to color stays total and compile-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Default,
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Error,
}
