//! Application Context
//!
//! Commands against the item store, provided via Leptos Context API.

use item_store::{ItemStore, SortOrder};
use leptos::prelude::*;

/// Handle to the single item store instance
#[derive(Clone, Copy)]
pub struct StoreContext {
    store: StoredValue<ItemStore, LocalStorage>,
}

impl StoreContext {
    pub fn new(store: StoredValue<ItemStore, LocalStorage>) -> Self {
        Self { store }
    }

    pub fn add_item(&self) {
        self.store.update_value(|store| store.add_item());
    }

    pub fn remove_item(&self) {
        self.store.update_value(|store| store.remove_item());
    }

    pub fn apply_order(&self, order: SortOrder) {
        self.store.update_value(|store| store.apply_order(order));
    }
}

pub fn use_store_context() -> StoreContext {
    expect_context::<StoreContext>()
}
