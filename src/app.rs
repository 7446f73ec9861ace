//! Inventory Manager App
//!
//! Root component: owns the store and lays out the form above the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ConfirmDialog, InventoryList, ItemForm, NotificationModal};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config.seed_samples));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(store, config));

    view! {
        <div class="app">
            <ItemForm />
            <InventoryList />
            <ConfirmDialog />
            <NotificationModal />
        </div>
    }
}
