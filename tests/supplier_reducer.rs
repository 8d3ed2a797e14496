mod common;

use common::{make_supplier, supplier_page_json};
use nossocloset_client::model::{SupplierPage, SupplierStatus};
use nossocloset_client::store::Reducer;
use nossocloset_client::suppliers::{SupplierIntent, SupplierReducer, SupplierState};

fn page_of(suppliers: Vec<nossocloset_client::model::Supplier>, total: u64) -> SupplierPage {
    let json = supplier_page_json(&suppliers, total, 0, 20);
    serde_json::from_value(json).unwrap()
}

fn populated_state() -> SupplierState {
    let page = page_of(
        vec![
            make_supplier(1, SupplierStatus::Active),
            make_supplier(2, SupplierStatus::PendingVerification),
        ],
        2,
    );
    SupplierReducer::reduce(SupplierState::default(), SupplierIntent::ListFulfilled(page))
}

#[test]
fn list_pending_sets_loading_and_clears_error() {
    let mut state = SupplierState::default();
    state.error = Some("antiga".to_string());
    let state = SupplierReducer::reduce(state, SupplierIntent::ListPending);
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn list_fulfilled_replaces_page_and_metadata() {
    let state = populated_state();
    assert_eq!(state.suppliers.len(), 2);
    assert!(!state.loading);
    assert_eq!(state.page.total_elements, 2);
    assert_eq!(state.page.current_page, 0);
}

#[test]
fn page_of_45_elements_spans_three_pages() {
    let suppliers: Vec<_> = (1..=20)
        .map(|id| make_supplier(id, SupplierStatus::Active))
        .collect();
    let page = page_of(suppliers, 45);
    let state = SupplierReducer::reduce(SupplierState::default(), SupplierIntent::ListFulfilled(page));
    assert_eq!(state.page.total_pages, 3);
    assert!(state.page.has_next);
    assert!(!state.page.has_previous);
}

#[test]
fn list_rejected_keeps_prior_data_and_sets_error() {
    let state = populated_state();
    let state = SupplierReducer::reduce(
        state,
        SupplierIntent::ListRejected("Erro ao carregar fornecedores".to_string()),
    );
    assert_eq!(state.suppliers.len(), 2, "collection must stay intact");
    assert_eq!(state.error.as_deref(), Some("Erro ao carregar fornecedores"));
    assert!(!state.loading);
}

#[test]
fn newer_error_overwrites_older() {
    let state = SupplierReducer::reduce(
        SupplierState::default(),
        SupplierIntent::Failed("primeira".to_string()),
    );
    let state = SupplierReducer::reduce(state, SupplierIntent::Failed("segunda".to_string()));
    assert_eq!(state.error.as_deref(), Some("segunda"));
}

#[test]
fn created_prepends_to_list() {
    let state = populated_state();
    let state = SupplierReducer::reduce(
        state,
        SupplierIntent::Created(make_supplier(3, SupplierStatus::PendingVerification)),
    );
    assert_eq!(state.suppliers[0].id, 3);
    assert_eq!(state.suppliers.len(), 3);
}

#[test]
fn updated_replaces_by_id_and_keeps_position() {
    let state = populated_state();
    let mut changed = make_supplier(2, SupplierStatus::PendingVerification);
    changed.name = "Novo Nome".to_string();
    let state = SupplierReducer::reduce(state, SupplierIntent::Updated(changed));
    assert_eq!(state.suppliers[1].id, 2);
    assert_eq!(state.suppliers[1].name, "Novo Nome");
}

#[test]
fn updated_touches_current_only_on_id_match() {
    let mut state = populated_state();
    state.current_supplier = Some(make_supplier(1, SupplierStatus::Active));

    let mut other = make_supplier(2, SupplierStatus::PendingVerification);
    other.name = "Outro".to_string();
    let state = SupplierReducer::reduce(state, SupplierIntent::Updated(other));
    assert_eq!(state.current_supplier.as_ref().unwrap().id, 1);

    let mut same = make_supplier(1, SupplierStatus::Active);
    same.name = "Atualizado".to_string();
    let state = SupplierReducer::reduce(state, SupplierIntent::Updated(same));
    assert_eq!(state.current_supplier.unwrap().name, "Atualizado");
}

#[test]
fn transition_out_of_active_leaves_active_list() {
    let mut state = populated_state();
    state.active_suppliers = vec![
        make_supplier(1, SupplierStatus::Active),
        make_supplier(5, SupplierStatus::Active),
    ];

    let suspended = make_supplier(1, SupplierStatus::Suspended);
    let state = SupplierReducer::reduce(state, SupplierIntent::Transitioned(suspended));

    assert!(state.active_suppliers.iter().all(|s| s.id != 1));
    assert_eq!(state.active_suppliers.len(), 1);
    // Still present, with new status, in the unfiltered list.
    assert!(state.contains(1));
    assert_eq!(state.suppliers[0].status, SupplierStatus::Suspended);
}

#[test]
fn transition_to_active_keeps_entry_in_active_list() {
    let mut state = populated_state();
    state.active_suppliers = vec![make_supplier(1, SupplierStatus::Active)];

    let mut reactivated = make_supplier(1, SupplierStatus::Active);
    reactivated.notes = Some("reativado".to_string());
    let state = SupplierReducer::reduce(state, SupplierIntent::Transitioned(reactivated));
    assert_eq!(state.active_suppliers.len(), 1);
    assert_eq!(state.active_suppliers[0].notes.as_deref(), Some("reativado"));
}

#[test]
fn deleted_removes_from_all_lists() {
    let mut state = populated_state();
    state.active_suppliers = vec![make_supplier(1, SupplierStatus::Active)];
    let state = SupplierReducer::reduce(state, SupplierIntent::Deleted(1));
    assert!(!state.contains(1));
    assert!(state.active_suppliers.is_empty());
    assert_eq!(state.suppliers.len(), 1);
}

#[test]
fn categories_and_statistics_fill_their_slots() {
    let state = SupplierReducer::reduce(
        SupplierState::default(),
        SupplierIntent::CategoriesFulfilled(vec!["Vestidos".to_string(), "Calçados".to_string()]),
    );
    assert_eq!(state.categories.len(), 2);

    let statistics = serde_json::from_value(serde_json::json!({
        "totalActive": 4,
        "totalInactive": 1,
        "totalSuspended": 0,
        "totalPending": 2,
        "totalCategories": 6,
        "categories": ["Vestidos"],
    }))
    .unwrap();
    let state = SupplierReducer::reduce(state, SupplierIntent::StatisticsFulfilled(statistics));
    assert_eq!(state.statistics.unwrap().total_active, 4);
}

#[test]
fn clear_error_and_set_page_are_local() {
    let mut state = populated_state();
    state.error = Some("algo".to_string());
    let state = SupplierReducer::reduce(state, SupplierIntent::ClearError);
    assert!(state.error.is_none());

    let state = SupplierReducer::reduce(state, SupplierIntent::SetPage(2));
    assert_eq!(state.page.current_page, 2);
}

#[test]
fn clear_current_drops_detail_entity() {
    let mut state = populated_state();
    state.current_supplier = Some(make_supplier(1, SupplierStatus::Active));
    let state = SupplierReducer::reduce(state, SupplierIntent::ClearCurrent);
    assert!(state.current_supplier.is_none());
}
