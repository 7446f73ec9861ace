//! User Flows
//!
//! The three round trips between the view, the store and the backend:
//! fetch-all, submit (add or update) and confirm-then-delete. Each one is a
//! single sequential future; the store is only touched between awaits.

use async_trait::async_trait;

use crate::api::{ApiError, ErrorKind, InventoryApi};
use crate::domain::ItemId;
use crate::notification::Notification;
use crate::state::{Command, EditorError, StateCell};

pub const SAVED: &str = "Item added/updated successfully!";
pub const SAVE_REJECTED: &str = "Failed to add/update inventory.";
pub const SAVE_TRANSPORT: &str = "There was an issue adding/updating the inventory item.";
pub const DELETE_FAILED: &str = "There was an issue deleting the item.";
pub const LOAD_FAILED: &str = "There was an issue loading the inventory.";

/// Text of a yes/no question put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: "You won't be able to revert this action!".to_string(),
            confirm_label: "Yes, delete it!".to_string(),
            cancel_label: "No, cancel!".to_string(),
        }
    }
}

/// Asks the user a yes/no question and waits for the answer
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Fetch-all; failures are recorded and surfaced like every other failure
pub async fn load_inventory<A, S>(api: &A, state: &S) -> Option<Notification>
where
    A: InventoryApi + ?Sized,
    S: StateCell + ?Sized,
{
    state.update(|s| s.apply(Command::LoadStarted))?;
    match api.list().await {
        Ok(items) => {
            log::info!("loaded {} inventory items", items.len());
            state.update(|s| s.apply(Command::Loaded(items)));
            None
        }
        Err(e) => {
            log::error!("Error fetching inventory: {}", e);
            state.update(|s| s.apply(Command::LoadFailed(e.to_string())));
            Some(Notification::from_api_error(&e, "Error!", LOAD_FAILED))
        }
    }
}

/// Submit the editor: update when editing, create otherwise
///
/// Returns `None` when a submit is already in flight.
pub async fn submit_item<A, S>(api: &A, state: &S) -> Option<Notification>
where
    A: InventoryApi + ?Sized,
    S: StateCell + ?Sized,
{
    let request = match state.update(|s| s.editor.begin_submit())? {
        Ok(request) => request,
        Err(EditorError::Busy) => {
            log::debug!("submit ignored, save already in progress");
            return None;
        }
        Err(EditorError::Invalid(e)) => return Some(Notification::error("Oops...", e.to_string())),
    };

    let result = match &request.target {
        Some(id) => api.update(id, &request.fields).await,
        None => api.create(&request.fields).await,
    };

    match result {
        Ok(saved) => {
            log::info!("saved item {}", saved.item.id);
            let command = match request.target {
                Some(_) => Command::Updated(saved.item),
                None => Command::Created(saved.item),
            };
            state.update(|s| {
                s.editor.finish_submit(Ok(()));
                s.apply(command);
            });
            let title = saved.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| SAVED.to_string());
            Some(Notification::success(title, None))
        }
        Err(e) => {
            log::error!("Error adding/updating inventory: {}", e);
            let (banner, notification) = save_failure(&e);
            state.update(|s| s.editor.finish_submit(Err(banner)));
            Some(notification)
        }
    }
}

fn save_failure(err: &ApiError) -> (String, Notification) {
    match err.kind() {
        ErrorKind::Application => {
            let text = err.server_message().unwrap_or(SAVE_REJECTED);
            (text.to_string(), Notification::error("Oops...", text))
        }
        ErrorKind::Transport => (
            "An error occurred while adding/updating inventory.".to_string(),
            Notification::error("An error occurred", SAVE_TRANSPORT),
        ),
    }
}

/// Ask, then delete; cancelling (or an unknown id) does nothing
pub async fn delete_item<A, C, S>(api: &A, confirm: &C, state: &S, id: &ItemId) -> Option<Notification>
where
    A: InventoryApi + ?Sized,
    C: Confirm + ?Sized,
    S: StateCell + ?Sized,
{
    if let Err(e) = state.update(|s| s.get(id).map(|_| ()))? {
        log::warn!("delete skipped: {}", e);
        return None;
    }

    if !confirm.confirm(&ConfirmPrompt::delete()).await {
        log::debug!("delete of {} cancelled", id);
        return None;
    }

    match api.delete(id).await {
        Ok(message) => {
            log::info!("deleted item {}", id);
            state.update(|s| s.apply(Command::Removed(id.clone())));
            Some(Notification::success("Deleted!", message))
        }
        Err(e) => {
            log::error!("Error deleting inventory: {}", e);
            Some(Notification::from_api_error(&e, "Error!", DELETE_FAILED))
        }
    }
}
