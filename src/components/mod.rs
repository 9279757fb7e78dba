//! UI Components
//!
//! Leptos components for the storage room screen.

mod add_remove_buttons;
mod item_list;
mod item_row;
mod order_buttons;

pub use add_remove_buttons::AddRemoveButtons;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use order_buttons::OrderButtons;
