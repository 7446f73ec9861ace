//! Inventory List Component
//!
//! Searchable table over the store's item list. Fetch-all runs once when the
//! list is first displayed and again on demand from the Reload button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_core::{flows, LoadState};

use crate::components::{InventoryRow, SearchBar};
use crate::context::{use_app_context, AppContext};
use crate::store::{store_notify, AppStateStoreFields};

fn reload(ctx: AppContext) {
    spawn_local(async move {
        let notification = flows::load_inventory(&ctx.api(), &ctx.inventory()).await;
        store_notify(&ctx.store, notification);
    });
}

/// Inventory table with search
#[component]
pub fn InventoryList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Fetch-all on first display
    Effect::new(move |_| reload(ctx));

    let rows = move || {
        store
            .inventory()
            .read()
            .visible()
            .into_iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    let load_state = move || store.inventory().read().load_state().clone();
    let is_empty = move || store.inventory().read().visible().is_empty();

    view! {
        <div class="list-inventory-container">
            <h2>"Inventory List"</h2>

            <div class="list-toolbar">
                <SearchBar />
                <button
                    class="btn btn-secondary"
                    disabled=move || load_state() == LoadState::Loading
                    on:click=move |_| reload(ctx)
                >
                    "Reload"
                </button>
            </div>

            {move || match load_state() {
                LoadState::Loading => Some(view! { <div class="loading">"Loading..."</div> }.into_any()),
                LoadState::Failed(reason) => Some(view! {
                    <div class="alert alert-danger">{format!("Could not load inventory: {}", reason)}</div>
                }.into_any()),
                LoadState::Loaded => None,
            }}

            <table class="table table-striped table-bordered">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Item Name"</th>
                        <th>"Quantity"</th>
                        <th>"Price"</th>
                        <th>"Category"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|(index, item)| {
                            // every displayed field, so in-place updates re-render the row
                            (
                                *index,
                                item.id.clone(),
                                item.item_name.clone(),
                                item.quantity,
                                item.price.to_bits(),
                                item.category,
                            )
                        }
                        children=move |(index, item)| view! { <InventoryRow number={index + 1} item=item /> }
                    />
                    <Show when=is_empty>
                        <tr>
                            <td colspan="6" class="text-center">"No items found"</td>
                        </tr>
                    </Show>
                </tbody>
            </table>
        </div>
    }
}
