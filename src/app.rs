//! Todo Web UI App
//!
//! Root component: provides the app context and switches between screens.

use leptos::prelude::*;

use crate::components::{CreateTodoPage, LoginPage, RequireSession, SignupPage, TodoListPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::{self, Route};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(route::current_route());

    // Provide context to all children
    let ctx = AppContext::new((route, set_route), AppConfig::from_build_env());
    provide_context(ctx);

    // Browser back/forward
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.follow_location());

    view! {
        <main class="app-layout">
            {move || match route.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Signup => view! { <SignupPage /> }.into_any(),
                Route::Todos => view! {
                    <RequireSession>
                        <TodoListPage />
                    </RequireSession>
                }.into_any(),
                Route::CreateTodo => view! {
                    <RequireSession>
                        <CreateTodoPage />
                    </RequireSession>
                }.into_any(),
            }}
        </main>
    }
}
