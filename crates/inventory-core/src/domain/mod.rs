//! Domain Layer
//!
//! Inventory entities and the form draft they are edited through.
//! No HTTP or UI concerns live here.

mod entity;
mod item;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{sample_items, Category, InventoryItem, ItemDraft, ItemFields, ItemId};
