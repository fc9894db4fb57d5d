//! Action Errors
//!
//! Failures of backend calls and the session writes that follow them.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never completed or the response body could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("backend returned {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// 2xx response with an unexpected body
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Stored session id cannot be used for this request
    #[error("invalid session id: {0}")]
    InvalidSession(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// Message to show the user: the server's own message when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Browser key-value storage failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage write failed: {0}")]
    Write(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
