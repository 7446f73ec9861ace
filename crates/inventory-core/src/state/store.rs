//! Inventory Store
//!
//! The one authoritative copy of the list, the editor, and the search query.
//! List mutations go through [`InventoryState::apply`].

use std::cell::RefCell;
use std::collections::HashSet;

use super::editor::Editor;
use super::search::filter_items;
use crate::domain::{sample_items, DomainError, DomainResult, Entity, InventoryItem, ItemId};

/// Progress of the fetch-all request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Reducer commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch-all was (re)issued
    LoadStarted,
    /// Fetch-all succeeded
    Loaded(Vec<InventoryItem>),
    /// Fetch-all failed; the list is left as it was
    LoadFailed(String),
    /// The backend created this item
    Created(InventoryItem),
    /// The backend returned this item after an update
    Updated(InventoryItem),
    /// The backend confirmed deletion
    Removed(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryState {
    items: Vec<InventoryItem>,
    load: LoadState,
    pub editor: Editor,
    /// Search box contents
    pub query: String,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the sample rows; fetch-all still replaces them
    pub fn seeded() -> Self {
        Self { items: sample_items(), ..Self::default() }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn get(&self, id: &ItemId) -> DomainResult<&InventoryItem> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("item {}", id)))
    }

    /// Items matching the current query
    pub fn visible(&self) -> Vec<&InventoryItem> {
        filter_items(&self.items, &self.query)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Loaded(items) => {
                self.items = dedup_by_id(items);
                self.load = LoadState::Loaded;
            }
            Command::LoadStarted => {
                self.load = LoadState::Loading;
            }
            Command::LoadFailed(message) => {
                self.load = LoadState::Failed(message);
            }
            Command::Created(item) => {
                self.items.push(item);
            }
            Command::Updated(item) => {
                match self.items.iter_mut().find(|existing| existing.id == item.id) {
                    Some(existing) => *existing = item,
                    None => log::debug!("update for {} arrived after it was removed, dropped", item.id),
                }
            }
            Command::Removed(id) => {
                self.items.retain(|item| item.id != id);
                self.editor.forget(&id);
            }
        }
    }
}

/// Keep the first entity for each id, in order
fn dedup_by_id<T: Entity>(entities: Vec<T>) -> Vec<T> {
    let before = entities.len();
    let mut seen = HashSet::new();
    let kept: Vec<T> = entities.into_iter().filter(|entity| seen.insert(entity.id().clone())).collect();
    if kept.len() != before {
        log::warn!("dropped {} items with duplicate ids", before - kept.len());
    }
    kept
}

/// Somewhere an [`InventoryState`] lives across await points
///
/// Returns `None` when the state is gone (e.g. the view was disposed).
pub trait StateCell {
    fn update<R>(&self, f: impl FnOnce(&mut InventoryState) -> R) -> Option<R>;
}

impl StateCell for RefCell<InventoryState> {
    fn update<R>(&self, f: impl FnOnce(&mut InventoryState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
