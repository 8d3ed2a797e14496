use crate::model::{CustomOrder, PageInfo};
use crate::store::StoreState;

/// Client-side cache of the custom order collection.
///
/// `orders` is the admin's last-fetched page and `my_orders` the
/// customer's own; `pending_analysis` and `urgent_orders` are derived
/// views whose members leave when a transition moves them out of the
/// view's predicate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderState {
    pub orders: Vec<CustomOrder>,
    pub my_orders: Vec<CustomOrder>,
    pub current_order: Option<CustomOrder>,
    pub pending_analysis: Vec<CustomOrder>,
    pub urgent_orders: Vec<CustomOrder>,
    pub page: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState for OrderState {}

impl OrderState {
    pub fn contains(&self, id: i64) -> bool {
        self.orders.iter().any(|o| o.id == id)
    }
}
