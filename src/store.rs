//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The displayed
//! list here is a mirror of the item store's latest snapshot.

use item_store::{CommandGuards, ExpandedRows, Record, SortOrder};
use leptos::prelude::*;
use reactive_stores::Store;

/// Rendering state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Latest published displayed list
    pub displayed: Vec<Record>,
    /// Size of the master list
    pub master_len: usize,
    /// Length at which adding is disabled
    pub max_displayed: usize,
    /// Selected ordering option
    pub order: SortOrder,
    /// Rows showing their description
    pub expanded: ExpandedRows,
}

impl ViewState {
    pub fn new(master_len: usize, max_displayed: usize) -> Self {
        Self {
            master_len,
            max_displayed,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mirror a published snapshot, forgetting expansion flags of removed rows
pub fn store_replace_displayed(store: &ViewStore, snapshot: &[Record]) {
    store.expanded().write().retain_present(snapshot);
    store.displayed().set(snapshot.to_vec());
}

pub fn store_displayed(store: &ViewStore) -> Vec<Record> {
    store.displayed().get()
}

pub fn store_count_label(store: &ViewStore) -> String {
    format!(
        "{} of {} items",
        store.displayed().with(|list| list.len()),
        store.master_len().get()
    )
}

pub fn store_guards(store: &ViewStore) -> CommandGuards {
    CommandGuards::for_len(
        store.displayed().with(|list| list.len()),
        store.max_displayed().get(),
    )
}

pub fn store_order(store: &ViewStore) -> SortOrder {
    store.order().get()
}

pub fn store_select_order(store: &ViewStore, order: SortOrder) {
    store.order().set(order);
}

pub fn store_is_expanded(store: &ViewStore, name: &str) -> bool {
    store.expanded().with(|rows| rows.is_expanded(name))
}

/// Flip a row's expansion flag, returning the new state
pub fn store_toggle_row(store: &ViewStore, name: &str) -> bool {
    store.expanded().write().toggle(name)
}
