//! Inventory Manager Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);
    log::info!("starting inventory UI against {}", config.api.base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
