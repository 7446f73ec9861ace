//! Inventory Core
//!
//! Layered the same way regardless of where it runs:
//! - domain: the inventory item and its form draft
//! - api: REST client for the inventory backend
//! - state: the single store the UI renders from
//! - flows: load / submit / delete round trips

pub mod api;
pub mod domain;
pub mod flows;
pub mod notification;
pub mod state;

#[cfg(test)]
mod testing;

pub use api::{ApiConfig, ApiError, HttpInventoryApi, InventoryApi};
pub use domain::{Category, InventoryItem, ItemDraft, ItemFields, ItemId};
pub use flows::{Confirm, ConfirmPrompt};
pub use notification::{Level, Notification};
pub use state::{Command, InventoryState, LoadState, StateCell};
