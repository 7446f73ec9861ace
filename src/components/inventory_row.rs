//! Inventory Row Component
//!
//! Single row of the inventory table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_core::{flows, InventoryItem};

use crate::context::use_app_context;
use crate::store::{store_begin_edit, store_notify, AppStateStoreFields};

/// A single item row with edit/delete actions
#[component]
pub fn InventoryRow(
    /// 1-based position in the filtered view
    number: usize,
    item: InventoryItem,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = item.id.clone();
    let is_editing = {
        let id = id.clone();
        move || store.inventory().read().editor.editing_id() == Some(&id)
    };

    let edit_item = item.clone();
    let on_edit = move |_| store_begin_edit(&store, edit_item.clone());

    let on_delete = move |_| {
        let id = id.clone();
        spawn_local(async move {
            let notification = flows::delete_item(&ctx.api(), &ctx.confirm, &ctx.inventory(), &id).await;
            store_notify(&store, notification);
        });
    };

    view! {
        <tr class:editing=is_editing>
            <td>{number}</td>
            <td>{item.item_name}</td>
            <td>{item.quantity}</td>
            <td>{item.price.to_string()}</td>
            <td>{item.category.label()}</td>
            <td class="actions">
                <button class="btn btn-warning" title="Edit" on:click=on_edit>"✎"</button>
                <button class="btn btn-danger" title="Delete" on:click=on_delete>"🗑"</button>
            </td>
        </tr>
    }
}
