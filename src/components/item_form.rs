//! Item Form Component
//!
//! Add/edit form. Field values live in the editor draft of the store, so
//! loading an item for editing is a single store transition rather than a
//! watcher on some external value.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_core::flows;
use inventory_core::state::EditorMode;

use crate::components::CategorySelect;
use crate::context::use_app_context;
use crate::store::{store_cancel_edit, store_notify, AppStateStoreFields};

/// Form for creating new items or updating the one being edited
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_editing = move || matches!(store.inventory().read().editor.mode(), EditorMode::Edit(_));
    let is_submitting = move || store.inventory().read().editor.is_submitting();
    let error = move || store.inventory().read().editor.error().map(str::to_string);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let notification = flows::submit_item(&ctx.api(), &ctx.inventory()).await;
            store_notify(&store, notification);
        });
    };

    let button_label = move || {
        if is_submitting() {
            "Saving..."
        } else if is_editing() {
            "Update Item"
        } else {
            "Add Item"
        }
    };

    view! {
        <div class="add-inventory-container">
            <h2>{move || if is_editing() { "Edit Inventory" } else { "Add Inventory" }}</h2>

            {move || error().map(|message| view! { <div class="alert alert-danger">{message}</div> })}

            <form class="inventory-form" on:submit=submit>
                <div class="form-row">
                    <label for="itemName">"Item Name"</label>
                    <input
                        type="text"
                        id="itemName"
                        placeholder="Enter item name"
                        required
                        prop:value=move || store.inventory().read().editor.draft.item_name.clone()
                        on:input=move |ev| {
                            store.inventory().write().editor.draft.item_name = event_target_value(&ev);
                        }
                    />
                </div>
                <div class="form-row">
                    <label for="quantity">"Quantity"</label>
                    <input
                        type="number"
                        id="quantity"
                        placeholder="Enter quantity"
                        min="0"
                        step="1"
                        required
                        prop:value=move || store.inventory().read().editor.draft.quantity.clone()
                        on:input=move |ev| {
                            store.inventory().write().editor.draft.quantity = event_target_value(&ev);
                        }
                    />
                </div>
                <div class="form-row">
                    <label for="price">"Price"</label>
                    <input
                        type="number"
                        id="price"
                        placeholder="Enter price"
                        min="0"
                        step="any"
                        required
                        prop:value=move || store.inventory().read().editor.draft.price.clone()
                        on:input=move |ev| {
                            store.inventory().write().editor.draft.price = event_target_value(&ev);
                        }
                    />
                </div>
                <div class="form-row">
                    <label for="category">"Category"</label>
                    <CategorySelect
                        value=Signal::derive(move || store.inventory().read().editor.draft.category.clone())
                        on_change=move |value: String| store.inventory().write().editor.draft.category = value
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=is_submitting>
                    {button_label}
                </button>
                <Show when=move || is_editing() && !is_submitting()>
                    <button type="button" class="btn btn-secondary" on:click=move |_| store_cancel_edit(&store)>
                        "Cancel"
                    </button>
                </Show>
            </form>
        </div>
    }
}
