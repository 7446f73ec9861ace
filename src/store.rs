//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The inventory
//! itself (list, editor, query) is one `InventoryState`; the store adds the
//! notification currently on screen.

use leptos::prelude::*;
use reactive_stores::Store;

use inventory_core::{InventoryItem, InventoryState, Notification, StateCell};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, editor and search query
    pub inventory: InventoryState,
    /// Modal notification, if one is showing
    pub notification: Option<Notification>,
    /// Bumped for every notification shown
    pub notice_id: u64,
}

impl AppState {
    pub fn new(seed_samples: bool) -> Self {
        Self {
            inventory: if seed_samples { InventoryState::seeded() } else { InventoryState::new() },
            notification: None,
            notice_id: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Lets the core flows mutate the inventory between awaits
#[derive(Clone, Copy)]
pub struct InventoryHandle(pub AppStore);

impl StateCell for InventoryHandle {
    fn update<R>(&self, f: impl FnOnce(&mut InventoryState) -> R) -> Option<R> {
        let binding = self.0.inventory();
        let mut guard = binding.try_write()?;
        Some(f(&mut *guard))
    }
}

// ========================
// Store Helper Functions
// ========================

/// Show a notification (replacing any current one); `None` leaves things as they are
pub fn store_notify(store: &AppStore, notification: Option<Notification>) {
    if let Some(notification) = notification {
        *store.notice_id().write() += 1;
        *store.notification().write() = Some(notification);
    }
}

/// Close the notification, unless a newer one replaced notice `notice_id`
pub fn store_dismiss_notice(store: &AppStore, notice_id: u64) {
    if store.notice_id().get_untracked() == notice_id {
        store_dismiss(store);
    }
}

/// Close the notification modal
pub fn store_dismiss(store: &AppStore) {
    *store.notification().write() = None;
}

/// Load an item into the editor form
pub fn store_begin_edit(store: &AppStore, item: InventoryItem) {
    if !store.inventory().write().editor.begin_edit(item) {
        log::debug!("edit ignored while a save is in progress");
    }
}

/// Leave edit mode
pub fn store_cancel_edit(store: &AppStore) {
    store.inventory().write().editor.cancel_edit();
}

/// Update the search query
pub fn store_set_query(store: &AppStore, query: String) {
    store.inventory().write().query = query;
}
