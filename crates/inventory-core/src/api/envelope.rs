//! Response Envelope
//!
//! Every endpoint answers `{status, data?, message?}`. The `status` flag is
//! authoritative, whatever the HTTP status code says.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Turn `status: false` into [`ApiError::Rejected`]
    pub fn into_result(self) -> ApiResult<Accepted<T>> {
        if self.status {
            Ok(Accepted { data: self.data, message: self.message })
        } else {
            Err(ApiError::Rejected { message: self.message })
        }
    }
}

/// Body of a successful envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Accepted<T> {
    /// Data is mandatory for list/add/update
    pub fn require_data(self) -> ApiResult<(T, Option<String>)> {
        match self.data {
            Some(data) => Ok((data, self.message)),
            None => Err(ApiError::Decode("response has status true but no data".to_string())),
        }
    }
}

/// Parse a raw response body
///
/// An unreadable body is a transport failure on non-2xx and a decode failure
/// on 2xx; a readable one is returned as-is so the caller can inspect `status`.
pub fn decode_envelope<T: DeserializeOwned>(http_status: u16, body: &str) -> ApiResult<Envelope<T>> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&http_status) => Err(ApiError::Status { status: http_status }),
        Err(err) => Err(ApiError::Decode(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InventoryItem;
    use serde::de::IgnoredAny;

    #[test]
    fn test_success_envelope_with_data() {
        let body = r#"{"status":true,"data":[{"_id":"1","itemName":"Laptop","quantity":10,"price":50000,"category":"Electronics"}]}"#;
        let (items, message) = decode_envelope::<Vec<InventoryItem>>(200, body)
            .unwrap()
            .into_result()
            .unwrap()
            .require_data()
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(message, None);
    }

    #[test]
    fn test_status_false_is_rejected_even_on_200() {
        let body = r#"{"status":false,"message":"Item already exists"}"#;
        let err = decode_envelope::<InventoryItem>(200, body).unwrap().into_result().unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: Some("Item already exists".into()) });
    }

    #[test]
    fn test_readable_body_on_error_status_is_still_inspected() {
        let body = r#"{"status":false,"message":"Not found"}"#;
        let err = decode_envelope::<IgnoredAny>(404, body).unwrap().into_result().unwrap_err();
        assert_eq!(err.server_message(), Some("Not found"));
    }

    #[test]
    fn test_unreadable_body_on_error_status_is_transport() {
        let err = decode_envelope::<IgnoredAny>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502 });
    }

    #[test]
    fn test_unreadable_body_on_success_status_is_decode() {
        let err = decode_envelope::<IgnoredAny>(200, "").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_missing_data_on_success() {
        let accepted = decode_envelope::<InventoryItem>(200, r#"{"status":true,"message":"ok"}"#)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(accepted.message.as_deref(), Some("ok"));
        assert!(matches!(accepted.require_data(), Err(ApiError::Decode(_))));
    }
}
