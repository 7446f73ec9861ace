//! HTTP Inventory Client
//!
//! `reqwest` implementation of [`InventoryApi`]. On wasm32 reqwest goes
//! through the browser's `fetch`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};

use super::config::ApiConfig;
use super::envelope::{decode_envelope, Accepted};
use super::error::ApiResult;
use super::traits::{InventoryApi, Saved};
use crate::domain::{InventoryItem, ItemFields, ItemId};

#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: Client,
    config: ApiConfig,
}

impl HttpInventoryApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: Client::new(), config }
    }

    fn item_url(&self, action: &str, id: &ItemId) -> String {
        let id = utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC);
        self.config.endpoint(&format!("/inventory/{}/{}", action, id))
    }

    async fn send<T: DeserializeOwned>(&self, what: &str, request: RequestBuilder) -> ApiResult<Accepted<T>> {
        let response = request.send().await.map_err(|e| {
            log::warn!("{} failed before a response arrived: {}", what, e);
            e
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{} -> HTTP {} ({} bytes)", what, status, body.len());

        let result = decode_envelope::<T>(status, &body).and_then(|envelope| envelope.into_result());
        if let Err(e) = &result {
            log::warn!("{} failed: {}", what, e);
        }
        result
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryApi {
    async fn list(&self) -> ApiResult<Vec<InventoryItem>> {
        let request = self.client.get(self.config.endpoint("/inventory"));
        let (items, _) = self.send("list inventory", request).await?.require_data()?;
        Ok(items)
    }

    async fn create(&self, fields: &ItemFields) -> ApiResult<Saved> {
        let request = self.client.post(self.config.endpoint("/inventory/add")).json(fields);
        let (item, message) = self.send("add item", request).await?.require_data()?;
        Ok(Saved { item, message })
    }

    async fn update(&self, id: &ItemId, fields: &ItemFields) -> ApiResult<Saved> {
        let request = self.client.patch(self.item_url("update", id)).json(fields);
        let (item, message) = self.send("update item", request).await?.require_data()?;
        Ok(Saved { item, message })
    }

    async fn delete(&self, id: &ItemId) -> ApiResult<Option<String>> {
        let request = self.client.delete(self.item_url("delete", id));
        let accepted = self.send::<IgnoredAny>("delete item", request).await?;
        Ok(accepted.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_urls_are_percent_encoded() {
        let api = HttpInventoryApi::new(ApiConfig::default());
        assert_eq!(
            api.item_url("update", &ItemId::from("64f0a1")),
            "http://localhost:3001/inventory/update/64f0a1"
        );
        assert_eq!(
            api.item_url("delete", &ItemId::from("a/b c")),
            "http://localhost:3001/inventory/delete/a%2Fb%20c"
        );
    }
}
