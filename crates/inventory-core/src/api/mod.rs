//! API Layer
//!
//! Client side of the inventory REST backend.

mod config;
mod envelope;
mod error;
mod http;
mod traits;

pub use config::ApiConfig;
pub use envelope::{decode_envelope, Accepted, Envelope};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use http::HttpInventoryApi;
pub use traits::{InventoryApi, Saved};
