//! Test doubles for the backend and the confirmation dialog

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::{ApiError, ApiResult, InventoryApi, Saved};
use crate::domain::{sample_items, InventoryItem, ItemFields, ItemId};
use crate::flows::{Confirm, ConfirmPrompt};

/// A request as the fake backend saw it
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(ItemFields),
    Update(ItemId, ItemFields),
    Delete(ItemId),
}

/// In-memory backend assigning ids `"100"`, `"101"`, ...
pub struct FakeApi {
    pub rows: RefCell<Vec<InventoryItem>>,
    pub calls: RefCell<Vec<Call>>,
    /// Returned (once) instead of the next response
    pub fail_next: RefCell<Option<ApiError>>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn new(rows: Vec<InventoryItem>) -> Self {
        Self {
            rows: RefCell::new(rows),
            calls: RefCell::new(Vec::new()),
            fail_next: RefCell::new(None),
            next_id: Cell::new(100),
        }
    }

    pub fn with_samples() -> Self {
        Self::new(sample_items())
    }

    pub fn failing(self, err: ApiError) -> Self {
        *self.fail_next.borrow_mut() = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl InventoryApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<InventoryItem>> {
        self.record(Call::List)?;
        Ok(self.rows.borrow().clone())
    }

    async fn create(&self, fields: &ItemFields) -> ApiResult<Saved> {
        self.record(Call::Create(fields.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let item = InventoryItem::new(id.to_string(), fields.clone());
        self.rows.borrow_mut().push(item.clone());
        Ok(Saved { item, message: Some("Inventory added successfully".into()) })
    }

    async fn update(&self, id: &ItemId, fields: &ItemFields) -> ApiResult<Saved> {
        self.record(Call::Update(id.clone(), fields.clone()))?;
        let item = {
            let mut rows = self.rows.borrow_mut();
            let row = rows
                .iter_mut()
                .find(|row| &row.id == id)
                .ok_or(ApiError::Rejected { message: Some("Inventory not found".into()) })?;
            *row = InventoryItem::new(id.as_str(), fields.clone());
            row.clone()
        };
        // the response is still on its way; other requests may complete first
        tokio::task::yield_now().await;
        Ok(Saved { item, message: None })
    }

    async fn delete(&self, id: &ItemId) -> ApiResult<Option<String>> {
        self.record(Call::Delete(id.clone()))?;
        self.rows.borrow_mut().retain(|row| &row.id != id);
        Ok(Some("Inventory deleted successfully".into()))
    }
}

/// Answers every prompt with a fixed choice and remembers the prompts
pub struct ScriptedConfirm {
    answer: bool,
    pub asked: Cell<usize>,
    pub last_prompt: RefCell<Option<ConfirmPrompt>>,
}

impl ScriptedConfirm {
    fn answering(answer: bool) -> Self {
        Self { answer, asked: Cell::new(0), last_prompt: RefCell::new(None) }
    }

    pub fn yes() -> Self {
        Self::answering(true)
    }

    pub fn no() -> Self {
        Self::answering(false)
    }
}

#[async_trait(?Send)]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.asked.set(self.asked.get() + 1);
        *self.last_prompt.borrow_mut() = Some(prompt.clone());
        self.answer
    }
}
