//! Backend REST Bindings
//!
//! Frontend bindings to the todo backend, organized by domain.

mod auth;
mod todos;

use crate::error::{ApiError, ApiResult};
use crate::models::ErrorBody;

// Re-export all public items
pub use auth::*;
pub use todos::*;

/// reqwest-backed client for the todo backend
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a backend path (path starts with `/`)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Turn a non-2xx response into `ApiError::Status`, reading the server message if any
pub(crate) async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: ErrorBody::message_from(&body),
    })
}
