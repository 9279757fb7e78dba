//! Storage Room App
//!
//! Wires the item store to the view store and lays out the screen.

use item_store::{seed, ItemStore, StoreConfig};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddRemoveButtons, ItemList, OrderButtons};
use crate::context::StoreContext;
use crate::logging;
use crate::settings;
use crate::store::{store_replace_displayed, ViewState};

#[component]
pub fn App() -> impl IntoView {
    let loaded = settings::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(config.level_filter());
    if let Err(e) = &loaded {
        log::error!("[APP] {}; falling back to defaults", e);
    }

    let item_store = build_item_store(&config);
    let view_store = Store::new(ViewState::new(item_store.master().len(), config.max_displayed));

    // Keep the subscription alive as long as the app's owner
    let subscription = item_store.subscribe(move |snapshot| {
        log::debug!("[APP] displayed list now has {} items", snapshot.len());
        store_replace_displayed(&view_store, snapshot);
    });
    let _subscription = StoredValue::new_local(subscription);

    provide_context(view_store);
    provide_context(StoreContext::new(StoredValue::new_local(item_store)));

    view! {
        <main class="storage-room">
            <h1>"Storage Room"</h1>
            <AddRemoveButtons />
            <OrderButtons />
            <ItemList />
        </main>
    }
}

fn build_item_store(config: &StoreConfig) -> ItemStore {
    let records = seed::from_kind(&config.seed, settings::random_amount);
    log::info!("[APP] seeded {} records", records.len());
    ItemStore::new(records)
}
