//! API Configuration

const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Where the inventory backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim().trim_end_matches('/').to_string() }
    }

    /// Base URL baked in at build time via `INVENTORY_API_URL`, else the default
    pub fn from_env() -> Self {
        match option_env!("INVENTORY_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an endpoint path such as `/inventory/add`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
