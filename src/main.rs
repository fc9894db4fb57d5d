//! Todo Web UI Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod listing;
mod models;
mod notify;
mod route;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if console_logger::init_logger(config.log_level).is_ok() {
        log::info!("todo ui starting, backend at {}", config.api_base_url);
    }

    mount_to_body(App);
}
