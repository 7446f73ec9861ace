//! API Layer - Core Traits
//!
//! Abstract interface to the inventory backend. The HTTP client is the real
//! implementation; tests substitute an in-memory one.

use async_trait::async_trait;

use super::error::ApiResult;
use crate::domain::{InventoryItem, ItemFields, ItemId};

/// The four inventory endpoints
///
/// Futures are not `Send`: in the browser they are driven by the JS event loop.
#[async_trait(?Send)]
pub trait InventoryApi {
    /// Fetch-all
    async fn list(&self) -> ApiResult<Vec<InventoryItem>>;

    /// Create an item; the backend assigns its id
    async fn create(&self, fields: &ItemFields) -> ApiResult<Saved>;

    /// Replace the fields of an existing item
    async fn update(&self, id: &ItemId, fields: &ItemFields) -> ApiResult<Saved>;

    /// Delete an item, returning the backend's message
    async fn delete(&self, id: &ItemId) -> ApiResult<Option<String>>;
}

/// Authoritative item returned by create/update
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    pub item: InventoryItem,
    pub message: Option<String>,
}
