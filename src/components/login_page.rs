//! Login Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::forms::begin_submit;
use crate::models::SignInRequest;
use crate::notify::{self, LOGIN_FAILED, LOGIN_OK};
use crate::route::Route;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (mobile, set_mobile) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !begin_submit(loading, set_loading) { return; }
        let credentials = SignInRequest {
            mobile: mobile.get_untracked(),
            password: password.get_untracked(),
        };

        spawn_local(async move {
            let result = actions::sign_in(&ctx.backend(), &ctx.session, &credentials).await;
            set_loading.set(false);
            match result {
                Ok(_) => {
                    notify::alert(LOGIN_OK);
                    ctx.navigate(Route::Todos);
                }
                Err(e) => notify::report_failure("Login", &e, LOGIN_FAILED),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Login"</h2>

                <input
                    type="tel"
                    name="mobile"
                    placeholder="Mobile"
                    required
                    prop:value=move || mobile.get()
                    on:input=move |ev| set_mobile.set(event_target_value(&ev))
                />

                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>

                <div class="auth-divider">"or"</div>

                <button type="button" class="secondary-btn" on:click=move |_| ctx.navigate(Route::Signup)>
                    "Signup"
                </button>
            </form>
        </div>
    }
}
