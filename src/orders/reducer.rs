use crate::model::CustomOrder;
use crate::orders::intent::OrderIntent;
use crate::orders::state::OrderState;
use crate::store::Reducer;

/// Replace the entity with the same id, if present. Position is kept.
fn replace_by_id(list: &mut [CustomOrder], order: &CustomOrder) {
    if let Some(slot) = list.iter_mut().find(|o| o.id == order.id) {
        *slot = order.clone();
    }
}

/// Replace `order` by id in both main lists and the current slot.
fn replace_everywhere(state: &mut OrderState, order: CustomOrder) {
    replace_by_id(&mut state.orders, &order);
    replace_by_id(&mut state.my_orders, &order);
    if state.current_order.as_ref().is_some_and(|o| o.id == order.id) {
        state.current_order = Some(order);
    }
}

pub struct OrderReducer;

impl Reducer for OrderReducer {
    type State = OrderState;
    type Intent = OrderIntent;

    fn reduce(mut state: OrderState, intent: OrderIntent) -> OrderState {
        match intent {
            OrderIntent::ListPending | OrderIntent::MyOrdersPending | OrderIntent::GetPending => {
                state.loading = true;
                state.error = None;
                state
            }
            OrderIntent::ListFulfilled(page) => {
                state.loading = false;
                state.page = page.info();
                state.orders = page.orders;
                state
            }
            OrderIntent::MyOrdersFulfilled(page) => {
                state.loading = false;
                state.page = page.info();
                state.my_orders = page.orders;
                state
            }
            OrderIntent::ListRejected(message)
            | OrderIntent::MyOrdersRejected(message)
            | OrderIntent::GetRejected(message) => {
                state.loading = false;
                state.error = Some(message);
                state
            }
            OrderIntent::GetFulfilled(order) => {
                state.loading = false;
                state.current_order = Some(order);
                state
            }
            OrderIntent::Created(order) => {
                state.orders.insert(0, order.clone());
                state.my_orders.insert(0, order);
                state
            }
            OrderIntent::Updated(order) | OrderIntent::Confirmed(order) => {
                replace_everywhere(&mut state, order);
                state
            }
            OrderIntent::Analyzed(order) => {
                let id = order.id;
                replace_everywhere(&mut state, order);
                // Analysis prices the order; it is no longer pending.
                state.pending_analysis.retain(|o| o.id != id);
                state
            }
            OrderIntent::Cancelled(order) => {
                let id = order.id;
                replace_everywhere(&mut state, order);
                // A cancelled order satisfies neither derived view.
                state.pending_analysis.retain(|o| o.id != id);
                state.urgent_orders.retain(|o| o.id != id);
                state
            }
            OrderIntent::PendingAnalysisFulfilled(orders) => {
                state.pending_analysis = orders;
                state
            }
            OrderIntent::UrgentFulfilled(orders) => {
                state.urgent_orders = orders;
                state
            }
            OrderIntent::Failed(message) => {
                state.error = Some(message);
                state
            }
            OrderIntent::ClearError => {
                state.error = None;
                state
            }
            OrderIntent::ClearCurrent => {
                state.current_order = None;
                state
            }
            OrderIntent::SetPage(page) => {
                state.page.current_page = page;
                state
            }
        }
    }
}
