//! Item Row Component
//!
//! Name and amount, with an Open/Close toggle revealing the description.

use item_store::Record;
use leptos::prelude::*;

use crate::store::{store_is_expanded, store_toggle_row, use_view_store};

#[component]
pub fn ItemRow(record: Record) -> impl IntoView {
    let store = use_view_store();

    let Record { name, amount, description, .. } = record;
    let key = StoredValue::new(name.clone());
    let is_expanded = move || key.with_value(|name| store_is_expanded(&store, name));

    view! {
        <div class="item-row" class:expanded=is_expanded>
            <div class="item-summary">
                <div class="item-text">
                    <span class="item-name">{name}</span>
                    <span class="item-amount">{format!("Amount: {}", amount)}</span>
                </div>
                <button
                    class="toggle-btn"
                    on:click=move |_| {
                        key.with_value(|name| {
                            let open = store_toggle_row(&store, name);
                            log::trace!("[ItemRow] {} expanded={}", name, open);
                        });
                    }
                >
                    {move || if is_expanded() { "Close" } else { "Open" }}
                </button>
            </div>
            <Show when=is_expanded>
                <p class="item-description">{description.clone()}</p>
            </Show>
        </div>
    }
}
