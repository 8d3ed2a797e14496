//! Async actions tying the supplier API to the supplier store.
//!
//! Each action dispatches its pending marker (fetches only), performs
//! the call, and settles the completion. Errors are reduced to their
//! message and stored; callers re-trigger rather than retry.

use crate::api::{SupplierApi, Transport};
use crate::model::{SupplierFilters, SupplierRequest, SupplierTransition};
use crate::suppliers::{SupplierIntent, SupplierStore};

/// Fetch a filtered, paginated supplier page.
///
/// Guarded: if a newer fetch starts while this one is in flight, the
/// response is discarded.
pub async fn fetch_suppliers<T: Transport>(
    store: &SupplierStore,
    api: &SupplierApi<T>,
    filters: SupplierFilters,
) {
    let ticket = store.begin_fetch();
    store.dispatch(SupplierIntent::ListPending);
    match api.list(&filters).await {
        Ok(page) => {
            store.settle_fetch(ticket, SupplierIntent::ListFulfilled(page));
        }
        Err(err) => {
            tracing::warn!(error = %err, "supplier list fetch failed");
            store.settle_fetch(ticket, SupplierIntent::ListRejected(err.to_string()));
        }
    }
}

/// Fetch one supplier into the `current_supplier` slot. Guarded.
pub async fn fetch_supplier<T: Transport>(store: &SupplierStore, api: &SupplierApi<T>, id: i64) {
    let ticket = store.begin_fetch();
    store.dispatch(SupplierIntent::GetPending);
    match api.get(id).await {
        Ok(supplier) => {
            store.settle_fetch(ticket, SupplierIntent::GetFulfilled(supplier));
        }
        Err(err) => {
            tracing::warn!(error = %err, id, "supplier fetch failed");
            store.settle_fetch(ticket, SupplierIntent::GetRejected(err.to_string()));
        }
    }
}

/// Refresh the derived active-supplier list. Does not toggle loading.
pub async fn fetch_active_suppliers<T: Transport>(store: &SupplierStore, api: &SupplierApi<T>) {
    match api.active().await {
        Ok(suppliers) => store.dispatch(SupplierIntent::ActiveListFulfilled(suppliers)),
        Err(err) => {
            tracing::warn!(error = %err, "active supplier fetch failed");
            store.dispatch(SupplierIntent::Failed(err.to_string()));
        }
    }
}

pub async fn fetch_supplier_categories<T: Transport>(store: &SupplierStore, api: &SupplierApi<T>) {
    match api.categories().await {
        Ok(categories) => store.dispatch(SupplierIntent::CategoriesFulfilled(categories)),
        Err(err) => {
            tracing::warn!(error = %err, "supplier category fetch failed");
            store.dispatch(SupplierIntent::Failed(err.to_string()));
        }
    }
}

pub async fn fetch_supplier_statistics<T: Transport>(store: &SupplierStore, api: &SupplierApi<T>) {
    match api.statistics().await {
        Ok(statistics) => store.dispatch(SupplierIntent::StatisticsFulfilled(statistics)),
        Err(err) => {
            tracing::warn!(error = %err, "supplier statistics fetch failed");
            store.dispatch(SupplierIntent::Failed(err.to_string()));
        }
    }
}

/// Create a supplier; on success the entity is prepended to the cached
/// page without a refetch, so local order may diverge until the next
/// list call.
pub async fn create_supplier<T: Transport>(
    store: &SupplierStore,
    api: &SupplierApi<T>,
    request: SupplierRequest,
) {
    match api.create(&request).await {
        Ok(supplier) => {
            tracing::info!(id = supplier.id, "supplier created");
            store.dispatch(SupplierIntent::Created(supplier));
        }
        Err(err) => {
            tracing::warn!(error = %err, "supplier create failed");
            store.dispatch(SupplierIntent::Failed(err.to_string()));
        }
    }
}

pub async fn update_supplier<T: Transport>(
    store: &SupplierStore,
    api: &SupplierApi<T>,
    id: i64,
    request: SupplierRequest,
) {
    match api.update(id, &request).await {
        Ok(supplier) => store.dispatch(SupplierIntent::Updated(supplier)),
        Err(err) => {
            tracing::warn!(error = %err, id, "supplier update failed");
            store.dispatch(SupplierIntent::Failed(err.to_string()));
        }
    }
}

/// Apply a status transition (activate/deactivate/suspend).
pub async fn transition_supplier<T: Transport>(
    store: &SupplierStore,
    api: &SupplierApi<T>,
    id: i64,
    transition: SupplierTransition,
) {
    match api.transition(id, transition).await {
        Ok(supplier) => {
            tracing::info!(id, status = supplier.status.as_str(), "supplier transitioned");
            store.dispatch(SupplierIntent::Transitioned(supplier));
        }
        Err(err) => {
            tracing::warn!(error = %err, id, "supplier transition failed");
            store.dispatch(SupplierIntent::Failed(err.to_string()));
        }
    }
}

pub async fn delete_supplier<T: Transport>(store: &SupplierStore, api: &SupplierApi<T>, id: i64) {
    match api.delete(id).await {
        Ok(()) => store.dispatch(SupplierIntent::Deleted(id)),
        Err(err) => {
            tracing::warn!(error = %err, id, "supplier delete failed");
            store.dispatch(SupplierIntent::Failed(err.to_string()));
        }
    }
}
