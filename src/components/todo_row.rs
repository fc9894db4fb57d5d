//! Todo Row Component

use leptos::prelude::*;

use crate::models::Todo;

/// One todo with its status toggle button
#[component]
pub fn TodoRow(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<Todo>,
) -> impl IntoView {
    let done = todo.status.is_done();
    let row_class = if done { "todo-row done" } else { "todo-row in-progress" };
    let toggle_label = if done { "Mark In-Progress" } else { "Mark Completed" };
    let time = todo.display_time();
    let name = todo.name.clone();
    let description = todo.description.clone();
    let status = todo.status.as_str();

    view! {
        <li class=row_class>
            <div class="todo-details">
                <p class="todo-name">{name}</p>
                <p class="todo-description">{description}</p>
                <p class="todo-time">{time}</p>
                <p class="todo-status">{status}</p>
            </div>
            <button
                class="toggle-btn"
                on:click=move |_| on_toggle.run(todo.clone())
            >
                {toggle_label}
            </button>
        </li>
    }
}
