//! Item Editor State Machine
//!
//! `idle → editing(item) → submitting → idle`, with create mode as the
//! resting state. Transitions only happen through these methods, each of
//! which corresponds to a discrete user action or request completion.

use thiserror::Error;

use crate::domain::{DomainError, InventoryItem, ItemDraft, ItemFields, ItemId};

/// What a submit will do
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(InventoryItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("a save is already in progress")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Request produced by a successful [`Editor::begin_submit`]
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    /// Id of the edited item; `None` creates a new one
    pub target: Option<ItemId>,
    pub fields: ItemFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    mode: EditorMode,
    phase: Phase,
    /// Form contents; the view writes to it on every input event
    pub draft: ItemDraft,
    error: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            mode: EditorMode::Create,
            phase: Phase::Idle,
            draft: ItemDraft::default(),
            error: None,
        }
    }
}

impl Editor {
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Id of the item loaded into the form, if any
    pub fn editing_id(&self) -> Option<&ItemId> {
        match &self.mode {
            EditorMode::Edit(item) => Some(&item.id),
            EditorMode::Create => None,
        }
    }

    /// Load `item` into the form, discarding whatever was typed
    ///
    /// Returns false while a submit is in flight.
    pub fn begin_edit(&mut self, item: InventoryItem) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.draft = ItemDraft::from_item(&item);
        self.mode = EditorMode::Edit(item);
        self.error = None;
        true
    }

    /// Leave edit mode with an empty form
    pub fn cancel_edit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.reset();
        true
    }

    /// Validate the draft and enter `Submitting`
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, EditorError> {
        if self.is_submitting() {
            return Err(EditorError::Busy);
        }
        let fields = match self.draft.validate() {
            Ok(fields) => fields,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };
        self.phase = Phase::Submitting;
        self.error = None;
        Ok(SubmitRequest { target: self.editing_id().cloned(), fields })
    }

    /// Back to `Idle`; success clears the form, failure keeps it for retry
    /// with `Err(message)` shown above the form
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.phase = Phase::Idle;
        match outcome {
            Ok(()) => self.reset(),
            Err(message) => self.error = Some(message),
        }
    }

    /// Drop the edit if its item disappeared from the list
    pub(crate) fn forget(&mut self, id: &ItemId) {
        if !self.is_submitting() && self.editing_id() == Some(id) {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.mode = EditorMode::Create;
        self.draft = ItemDraft::default();
        self.error = None;
    }
}
