//! State Layer
//!
//! Single source of truth for the UI: the item list, the editor state
//! machine and the search query.

mod editor;
mod search;
mod store;

pub use editor::{Editor, EditorError, EditorMode, Phase, SubmitRequest};
pub use search::filter_items;
pub use store::{Command, InventoryState, LoadState, StateCell};
