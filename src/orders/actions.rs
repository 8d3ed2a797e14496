//! Async actions tying the custom order API to the order store.

use crate::api::{CustomOrderApi, Transport};
use crate::model::{CustomOrderFilters, CustomOrderRequest, OrderAnalysis};
use crate::orders::validate::{validate_order_request, ValidationError};
use crate::orders::{OrderIntent, OrderStore};

/// Fetch a filtered, paginated order page. Guarded against stale
/// responses.
pub async fn fetch_custom_orders<T: Transport>(
    store: &OrderStore,
    api: &CustomOrderApi<T>,
    filters: CustomOrderFilters,
) {
    let ticket = store.begin_fetch();
    store.dispatch(OrderIntent::ListPending);
    match api.list(&filters).await {
        Ok(page) => {
            store.settle_fetch(ticket, OrderIntent::ListFulfilled(page));
        }
        Err(err) => {
            tracing::warn!(error = %err, "order list fetch failed");
            store.settle_fetch(ticket, OrderIntent::ListRejected(err.to_string()));
        }
    }
}

/// Fetch the signed-in customer's own orders. Guarded.
pub async fn fetch_my_orders<T: Transport>(
    store: &OrderStore,
    api: &CustomOrderApi<T>,
    page: Option<u32>,
    size: Option<u32>,
) {
    let ticket = store.begin_fetch();
    store.dispatch(OrderIntent::MyOrdersPending);
    match api.my_orders(page, size).await {
        Ok(page) => {
            store.settle_fetch(ticket, OrderIntent::MyOrdersFulfilled(page));
        }
        Err(err) => {
            tracing::warn!(error = %err, "my-orders fetch failed");
            store.settle_fetch(ticket, OrderIntent::MyOrdersRejected(err.to_string()));
        }
    }
}

/// Fetch one order into the `current_order` slot. Guarded.
pub async fn fetch_custom_order<T: Transport>(store: &OrderStore, api: &CustomOrderApi<T>, id: i64) {
    let ticket = store.begin_fetch();
    store.dispatch(OrderIntent::GetPending);
    match api.get(id).await {
        Ok(order) => {
            store.settle_fetch(ticket, OrderIntent::GetFulfilled(order));
        }
        Err(err) => {
            tracing::warn!(error = %err, id, "order fetch failed");
            store.settle_fetch(ticket, OrderIntent::GetRejected(err.to_string()));
        }
    }
}

/// Validate and submit a new custom order.
///
/// Validation failures are returned to the form and never reach the
/// store or the network. On success the new order is prepended to both
/// the full list and the customer's own list.
pub async fn create_custom_order<T: Transport>(
    store: &OrderStore,
    api: &CustomOrderApi<T>,
    request: CustomOrderRequest,
) -> Result<(), Vec<ValidationError>> {
    validate_order_request(&request)?;

    match api.create(&request).await {
        Ok(order) => {
            tracing::info!(id = order.id, "custom order created");
            store.dispatch(OrderIntent::Created(order));
        }
        Err(err) => {
            tracing::warn!(error = %err, "order create failed");
            store.dispatch(OrderIntent::Failed(err.to_string()));
        }
    }
    Ok(())
}

pub async fn update_custom_order<T: Transport>(
    store: &OrderStore,
    api: &CustomOrderApi<T>,
    id: i64,
    request: CustomOrderRequest,
) {
    match api.update(id, &request).await {
        Ok(order) => store.dispatch(OrderIntent::Updated(order)),
        Err(err) => {
            tracing::warn!(error = %err, id, "order update failed");
            store.dispatch(OrderIntent::Failed(err.to_string()));
        }
    }
}

/// Price an order against a supplier (admin transition).
pub async fn analyze_order<T: Transport>(
    store: &OrderStore,
    api: &CustomOrderApi<T>,
    id: i64,
    analysis: OrderAnalysis,
) {
    match api.analyze(id, &analysis).await {
        Ok(order) => {
            tracing::info!(id, status = order.status.as_str(), "order analyzed");
            store.dispatch(OrderIntent::Analyzed(order));
        }
        Err(err) => {
            tracing::warn!(error = %err, id, "order analyze failed");
            store.dispatch(OrderIntent::Failed(err.to_string()));
        }
    }
}

/// Accept the final price (customer transition).
pub async fn confirm_order<T: Transport>(store: &OrderStore, api: &CustomOrderApi<T>, id: i64) {
    match api.confirm(id).await {
        Ok(order) => store.dispatch(OrderIntent::Confirmed(order)),
        Err(err) => {
            tracing::warn!(error = %err, id, "order confirm failed");
            store.dispatch(OrderIntent::Failed(err.to_string()));
        }
    }
}

/// Cancel an order with a reason; it leaves both derived views.
pub async fn cancel_order<T: Transport>(
    store: &OrderStore,
    api: &CustomOrderApi<T>,
    id: i64,
    reason: &str,
) {
    match api.cancel(id, reason).await {
        Ok(order) => {
            tracing::info!(id, "order cancelled");
            store.dispatch(OrderIntent::Cancelled(order));
        }
        Err(err) => {
            tracing::warn!(error = %err, id, "order cancel failed");
            store.dispatch(OrderIntent::Failed(err.to_string()));
        }
    }
}

/// Refresh the pending-analysis queue. Does not toggle loading.
pub async fn fetch_pending_analysis<T: Transport>(store: &OrderStore, api: &CustomOrderApi<T>) {
    match api.pending_analysis().await {
        Ok(orders) => store.dispatch(OrderIntent::PendingAnalysisFulfilled(orders)),
        Err(err) => {
            tracing::warn!(error = %err, "pending-analysis fetch failed");
            store.dispatch(OrderIntent::Failed(err.to_string()));
        }
    }
}

/// Refresh the urgent queue. Does not toggle loading.
pub async fn fetch_urgent_orders<T: Transport>(store: &OrderStore, api: &CustomOrderApi<T>) {
    match api.urgent().await {
        Ok(orders) => store.dispatch(OrderIntent::UrgentFulfilled(orders)),
        Err(err) => {
            tracing::warn!(error = %err, "urgent order fetch failed");
            store.dispatch(OrderIntent::Failed(err.to_string()));
        }
    }
}
