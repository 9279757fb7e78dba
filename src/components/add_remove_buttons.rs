//! Add / Remove Buttons
//!
//! Enabled state follows the displayed list length.

use leptos::prelude::*;

use crate::context::use_store_context;
use crate::store::{store_guards, use_view_store};

#[component]
pub fn AddRemoveButtons() -> impl IntoView {
    let ctx = use_store_context();
    let store = use_view_store();
    let guards = move || store_guards(&store);

    view! {
        <div class="add-remove-buttons">
            <button
                class="add-btn"
                disabled=move || !guards().can_add
                on:click=move |_| ctx.add_item()
            >
                "Add Item"
            </button>
            <button
                class="remove-btn"
                disabled=move || !guards().can_remove
                on:click=move |_| ctx.remove_item()
            >
                "Delete Item"
            </button>
        </div>
    }
}
