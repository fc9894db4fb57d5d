//! Screen Routing
//!
//! Maps screens to browser paths and keeps the address bar in sync.

use crate::session::{KeyValueStorage, Session};

/// The four screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Signup,
    Todos,
    CreateTodo,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Signup => "/signup",
            Route::Todos => "/todos",
            Route::CreateTodo => "/create-todo",
        }
    }

    /// Unknown paths land on login
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/signup" => Route::Signup,
            "/todos" => Route::Todos,
            "/create-todo" => Route::CreateTodo,
            _ => Route::Login,
        }
    }

    /// Screens that need a session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Todos | Route::CreateTodo)
    }
}

/// Screen actually shown for `route`: protected screens fall back to login
/// when no session is stored
pub fn guard<S: KeyValueStorage>(route: Route, session: &Session<S>) -> Route {
    if route.is_protected() && !session.is_authenticated() {
        Route::Login
    } else {
        route
    }
}

/// Route for the current `location.pathname`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| Route::from_path(&p))
        .unwrap_or_default()
}

/// Push a history entry for `route` unless the address bar already shows it
pub fn push_history(route: Route) {
    let Some(window) = web_sys::window() else { return };
    if window.location().pathname().ok().as_deref() == Some(route.path()) {
        return;
    }
    if let Ok(history) = window.history() {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
            log::warn!("history push failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Login, Route::Signup, Route::Todos, Route::CreateTodo] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_and_trailing_paths() {
        assert_eq!(Route::from_path("/todos/"), Route::Todos);
        assert_eq!(Route::from_path("/nope"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
    }

    #[test]
    fn test_protected_routes() {
        assert!(Route::Todos.is_protected());
        assert!(Route::CreateTodo.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Signup.is_protected());
    }

    #[test]
    fn test_guard_without_session_goes_to_login() {
        let session = Session::new(MemoryStorage::default());
        assert_eq!(guard(Route::Todos, &session), Route::Login);
        assert_eq!(guard(Route::CreateTodo, &session), Route::Login);
        assert_eq!(guard(Route::Signup, &session), Route::Signup);
    }

    #[test]
    fn test_guard_with_session_allows_list() {
        let session = Session::new(MemoryStorage::default());
        session.sign_in("42").unwrap();
        assert_eq!(guard(Route::Todos, &session), Route::Todos);
        assert_eq!(guard(Route::CreateTodo, &session), Route::CreateTodo);
    }

    #[test]
    fn test_guard_after_sign_out_goes_to_login() {
        let storage = MemoryStorage::default();
        let session = Session::new(storage.clone());
        session.sign_in("42").unwrap();
        assert_eq!(guard(Route::Todos, &session), Route::Todos);

        session.sign_out();
        assert_eq!(guard(Route::Todos, &session), Route::Login);
        assert_eq!(guard(Route::from_path("/todos"), &Session::new(storage)), Route::Login);
    }
}
