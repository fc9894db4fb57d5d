//! Session Guard Component
//!
//! Renders protected screens only while a session id is stored.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::guard;

/// Show `children` if logged in, otherwise send the user to login
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let current = ctx.route.get_untracked();
    let target = guard(current, &ctx.session);
    let allowed = target == current;

    if !allowed {
        log::info!("no session stored, redirecting to {}", target.path());
        Effect::new(move |_| ctx.navigate(target));
    }

    view! {
        <Show when=move || allowed>
            {children()}
        </Show>
    }
}
