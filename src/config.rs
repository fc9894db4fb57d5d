//! Build-time Configuration
//!
//! Values are baked in at compile time from `TODO_*` environment variables.

use log::LevelFilter;

use crate::listing::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// Todos per list page
    pub page_size: usize,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Configuration compiled into this build
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_PAGE_SIZE"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    pub fn from_values(base_url: Option<&str>, page_size: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let page_size = page_size
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let log_level = console_logger::parse_level(log_level.unwrap_or(DEFAULT_LOG_LEVEL));

        Self { api_base_url, page_size, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
