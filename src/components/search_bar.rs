//! Search Bar Component

use leptos::prelude::*;

use crate::store::{store_set_query, use_app_store, AppStateStoreFields};

/// Filters the inventory table on every keystroke
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="form-control search-input"
                placeholder="Search by item name or category"
                prop:value=move || store.inventory().read().query.clone()
                on:input=move |ev| store_set_query(&store, event_target_value(&ev))
            />
            <Show when=move || !store.inventory().read().query.is_empty()>
                <button class="btn btn-link" on:click=move |_| store_set_query(&store, String::new())>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
