//! Order Buttons
//!
//! Single-choice segmented row: Reset / Alphabetical / Amount.

use item_store::SortOrder;
use leptos::prelude::*;

use crate::context::use_store_context;
use crate::store::{store_order, store_select_order, use_view_store};

#[component]
pub fn OrderButtons() -> impl IntoView {
    let ctx = use_store_context();
    let store = use_view_store();

    view! {
        <div class="order-buttons segmented">
            {SortOrder::ALL
                .into_iter()
                .map(move |order| {
                    let is_selected = move || store_order(&store) == order;
                    view! {
                        <button
                            class="segment"
                            class:selected=is_selected
                            on:click=move |_| {
                                log::debug!(
                                    "[OrderButtons] selected index {} ({})",
                                    order.index(),
                                    order.label()
                                );
                                store_select_order(&store, order);
                                ctx.apply_order(order);
                            }
                        >
                            {order.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
