//! Signup Page Component
//!
//! Account creation form. Hobbies are optional, everything else is `required`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::forms::{begin_submit, SignupForm, COUNTRIES, GENDERS, HOBBIES};
use crate::notify::{self, SIGNUP_FAILED, SIGNUP_OK};
use crate::route::Route;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();

    let (form, set_form) = signal(SignupForm::default());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !begin_submit(loading, set_loading) { return; }
        let submitted = form.get_untracked();

        spawn_local(async move {
            let result = actions::sign_up(&ctx.backend(), &submitted).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    notify::alert(SIGNUP_OK);
                    ctx.navigate(Route::Login);
                }
                Err(e) => notify::report_failure("Signup", &e, SIGNUP_FAILED),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form wide" on:submit=on_submit>
                <h2>"Signup"</h2>

                <input
                    type="text"
                    name="name"
                    placeholder="Name"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                />

                <input
                    type="tel"
                    name="mobile"
                    placeholder="Mobile"
                    required
                    prop:value=move || form.with(|f| f.mobile.clone())
                    on:input=move |ev| set_form.update(|f| f.mobile = event_target_value(&ev))
                />

                <fieldset class="choice-group">
                    <legend>"Gender"</legend>
                    {GENDERS.iter().map(|gender| {
                        let gender = *gender;
                        view! {
                            <label class="choice">
                                <input
                                    type="radio"
                                    name="gender"
                                    value=gender
                                    required
                                    prop:checked=move || form.with(|f| f.gender == gender)
                                    on:change=move |_| set_form.update(|f| f.gender = gender.to_string())
                                />
                                {gender}
                            </label>
                        }
                    }).collect_view()}
                </fieldset>

                <select
                    name="country"
                    required
                    prop:value=move || form.with(|f| f.country.clone())
                    on:change=move |ev| set_form.update(|f| f.country = event_target_value(&ev))
                >
                    <option value="">"Select Country"</option>
                    {COUNTRIES.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>

                <fieldset class="choice-group">
                    <legend>"Hobbies"</legend>
                    {HOBBIES.iter().map(|hobby| {
                        let hobby = *hobby;
                        view! {
                            <label class="choice">
                                <input
                                    type="checkbox"
                                    value=hobby
                                    prop:checked=move || form.with(|f| f.has_hobby(hobby))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        set_form.update(|f| f.set_hobby(hobby, checked));
                                    }
                                />
                                {hobby}
                            </label>
                        }
                    }).collect_view()}
                </fieldset>

                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    required
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                />

                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    required
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| set_form.update(|f| f.password = event_target_value(&ev))
                />

                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing up..." } else { "Signup" }}
                </button>
            </form>
        </div>
    }
}
