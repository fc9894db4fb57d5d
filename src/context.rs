//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpBackend;
use crate::config::AppConfig;
use crate::route::{self, Route};
use crate::session::{BrowserStorage, Session};

/// App-wide signals and services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen currently shown - read
    pub route: ReadSignal<Route>,
    /// Screen currently shown - write
    set_route: WriteSignal<Route>,
    /// Persisted login state
    pub session: Session<BrowserStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), config: AppConfig) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session: Session::new(BrowserStorage),
            config: StoredValue::new(config),
        }
    }

    /// Switch screens and record the move in browser history
    pub fn navigate(&self, to: Route) {
        log::debug!("navigate -> {}", to.path());
        route::push_history(to);
        self.set_route.set(to);
    }

    /// Follow a browser back/forward move without pushing a new entry
    pub fn follow_location(&self) {
        self.set_route.set(route::current_route());
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    /// Backend client for one screen action
    pub fn backend(&self) -> HttpBackend {
        self.config.with_value(|c| HttpBackend::new(c.api_base_url.clone()))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
