//! Build-time Configuration
//!
//! The app is a static bundle, so settings are baked in at compile time:
//! - `INVENTORY_API_URL`: backend base URL (default `http://localhost:3001`)
//! - `INVENTORY_LOG`: console log level (default `info`)
//! - `INVENTORY_SEED`: `1`/`true` to show the sample rows until fetch-all lands

use inventory_core::ApiConfig;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: LevelFilter,
    pub seed_samples: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            log_level: parse_level(option_env!("INVENTORY_LOG")),
            seed_samples: parse_flag(option_env!("INVENTORY_SEED")),
        }
    }
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(), Some("1" | "true" | "yes"))
}
