//! Item List Component
//!
//! Keyed by record name, so rows keep their identity across reordering.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{store_count_label, store_displayed, use_view_store};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div class="item-list">
            <For
                each=move || store_displayed(&store)
                key=|record| record.name.clone()
                children=move |record| view! { <ItemRow record=record /> }
            />
            <p class="item-count">{move || store_count_label(&store)}</p>
        </div>
    }
}
