use crate::model::{Supplier, SupplierStatus};
use crate::store::Reducer;
use crate::suppliers::intent::SupplierIntent;
use crate::suppliers::state::SupplierState;

/// Replace the entity with the same id, if present. Position is kept.
fn replace_by_id(list: &mut [Supplier], supplier: &Supplier) {
    if let Some(slot) = list.iter_mut().find(|s| s.id == supplier.id) {
        *slot = supplier.clone();
    }
}

pub struct SupplierReducer;

impl Reducer for SupplierReducer {
    type State = SupplierState;
    type Intent = SupplierIntent;

    fn reduce(mut state: SupplierState, intent: SupplierIntent) -> SupplierState {
        match intent {
            SupplierIntent::ListPending | SupplierIntent::GetPending => {
                state.loading = true;
                state.error = None;
                state
            }
            SupplierIntent::ListFulfilled(page) => {
                state.loading = false;
                state.page = page.info();
                state.suppliers = page.suppliers;
                state
            }
            SupplierIntent::ListRejected(message) | SupplierIntent::GetRejected(message) => {
                state.loading = false;
                state.error = Some(message);
                state
            }
            SupplierIntent::ActiveListFulfilled(suppliers) => {
                state.active_suppliers = suppliers;
                state
            }
            SupplierIntent::GetFulfilled(supplier) => {
                state.loading = false;
                state.current_supplier = Some(supplier);
                state
            }
            SupplierIntent::Created(supplier) => {
                state.suppliers.insert(0, supplier);
                state
            }
            SupplierIntent::Updated(supplier) => {
                replace_by_id(&mut state.suppliers, &supplier);
                replace_by_id(&mut state.active_suppliers, &supplier);
                if state
                    .current_supplier
                    .as_ref()
                    .is_some_and(|s| s.id == supplier.id)
                {
                    state.current_supplier = Some(supplier);
                }
                state
            }
            SupplierIntent::Transitioned(supplier) => {
                replace_by_id(&mut state.suppliers, &supplier);
                replace_by_id(&mut state.active_suppliers, &supplier);
                // The active list's predicate is "status == ACTIVE"; a
                // transitioned supplier that no longer satisfies it
                // leaves that derived view.
                if supplier.status != SupplierStatus::Active {
                    state.active_suppliers.retain(|s| s.id != supplier.id);
                }
                if state
                    .current_supplier
                    .as_ref()
                    .is_some_and(|s| s.id == supplier.id)
                {
                    state.current_supplier = Some(supplier);
                }
                state
            }
            SupplierIntent::Deleted(id) => {
                state.suppliers.retain(|s| s.id != id);
                state.active_suppliers.retain(|s| s.id != id);
                state
            }
            SupplierIntent::CategoriesFulfilled(categories) => {
                state.categories = categories;
                state
            }
            SupplierIntent::StatisticsFulfilled(statistics) => {
                state.statistics = Some(statistics);
                state
            }
            SupplierIntent::Failed(message) => {
                state.error = Some(message);
                state
            }
            SupplierIntent::ClearError => {
                state.error = None;
                state
            }
            SupplierIntent::ClearCurrent => {
                state.current_supplier = None;
                state
            }
            SupplierIntent::SetPage(page) => {
                state.page.current_page = page;
                state
            }
        }
    }
}
