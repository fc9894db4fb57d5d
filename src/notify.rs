//! User Notifications
//!
//! Blocking `window.alert` popups for action outcomes.

use crate::error::ApiError;

pub const LOGIN_OK: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_OK: &str = "Signup successful, please login!";
pub const SIGNUP_FAILED: &str = "Signup failed, try again";
pub const SOMETHING_WRONG: &str = "Something went wrong!";
pub const LOAD_TODOS_FAILED: &str = "Failed to load todos";
pub const CREATE_TODO_FAILED: &str = "Failed to create To-Do";

pub fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::warn!("alert not shown: {}", message);
    }
}

/// Alert text for a failed action. Server messages win for non-2xx replies;
/// anything that never got a reply is reported generically.
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Status { .. } => err.user_message(fallback),
        _ => SOMETHING_WRONG.to_string(),
    }
}

/// Log and alert a failed login or signup
pub fn report_failure(action: &str, err: &ApiError, fallback: &str) {
    if !matches!(err, ApiError::Status { .. }) {
        log::error!("{} error: {}", action, err);
    }
    alert(&failure_message(err, fallback));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let rejected = ApiError::Status { status: 409, message: Some("Mobile already registered".into()) };
        assert_eq!(failure_message(&rejected, SIGNUP_FAILED), "Mobile already registered");

        let bare = ApiError::Status { status: 400, message: None };
        assert_eq!(failure_message(&bare, SIGNUP_FAILED), SIGNUP_FAILED);

        let offline = ApiError::Transport("connection refused".into());
        assert_eq!(failure_message(&offline, LOGIN_FAILED), SOMETHING_WRONG);
        assert_eq!(failure_message(&ApiError::Decode("eof".into()), LOGIN_FAILED), SOMETHING_WRONG);
    }
}
