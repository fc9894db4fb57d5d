//! Create Todo Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::forms::{begin_submit, TodoForm, STATUS_OPTIONS};
use crate::models::TodoStatus;
use crate::notify::{self, CREATE_TODO_FAILED};
use crate::route::Route;

/// Form for a new todo owned by the logged-in user
#[component]
pub fn CreateTodoPage() -> impl IntoView {
    let ctx = use_app_context();

    let (form, set_form) = signal(TodoForm::default());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = ctx.session.user_id() else {
            ctx.navigate(Route::Login);
            return;
        };
        if !begin_submit(loading, set_loading) { return; }
        let submitted = form.get_untracked();

        spawn_local(async move {
            let result = actions::create_todo(&ctx.backend(), &user_id, &submitted).await;
            set_loading.set(false);
            match result {
                Ok(()) => ctx.navigate(Route::Todos),
                Err(e) => {
                    log::warn!("creating todo failed: {}", e);
                    notify::alert(CREATE_TODO_FAILED);
                }
            }
        });
    };

    view! {
        <div class="create-page">
            <form class="create-form" on:submit=on_submit>
                <h2>"Create To-Do"</h2>

                <input
                    type="text"
                    name="name"
                    placeholder="Task Name"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                />

                <textarea
                    name="description"
                    placeholder="Description"
                    rows="3"
                    required
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
                ></textarea>

                <input
                    type="datetime-local"
                    name="time"
                    required
                    prop:value=move || form.with(|f| f.time.clone())
                    on:input=move |ev| set_form.update(|f| f.time = event_target_value(&ev))
                />

                <select
                    name="status"
                    prop:value=move || form.with(|f| f.status.as_str())
                    on:change=move |ev| set_form.update(|f| f.status = TodoStatus::from_str(&event_target_value(&ev)))
                >
                    {STATUS_OPTIONS.iter().map(|(status, label)| view! {
                        <option value=status.as_str()>{*label}</option>
                    }).collect_view()}
                </select>

                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating..." } else { "Create To-Do" }}
                </button>
            </form>
        </div>
    }
}
