//! UI Components
//!
//! Reusable Leptos components.

mod category_select;
mod confirm_dialog;
mod inventory_list;
mod inventory_row;
mod item_form;
mod notification_modal;
mod search_bar;

pub use category_select::CategorySelect;
pub use confirm_dialog::ConfirmDialog;
pub use inventory_list::InventoryList;
pub use inventory_row::InventoryRow;
pub use item_form::ItemForm;
pub use notification_modal::NotificationModal;
pub use search_bar::SearchBar;
