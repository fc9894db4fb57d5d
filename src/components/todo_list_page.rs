//! Todo List Page Component
//!
//! Fetches the session owner's todos once, then filters, pages and toggles
//! them locally.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::listing::{page_of, StatusFilter};
use crate::models::Todo;
use crate::notify::{self, LOAD_TODOS_FAILED};
use crate::route::Route;
use crate::store::{
    store_finish_loading, store_set_filter, store_set_todos, store_step_page, store_update_status,
    TodoListState, TodoListStateStoreFields,
};

#[component]
pub fn TodoListPage() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.page_size();
    let store = Store::new(TodoListState::new());

    // Load todos on mount
    Effect::new(move |_| {
        let Some(user_id) = ctx.session.user_id() else {
            store_finish_loading(&store);
            return;
        };
        spawn_local(async move {
            match actions::load_todos(&ctx.backend(), &user_id).await {
                Ok(todos) => store_set_todos(&store, todos),
                Err(e) => {
                    log::error!("loading todos failed: {}", e);
                    store_finish_loading(&store);
                    notify::alert(LOAD_TODOS_FAILED);
                }
            }
        });
    });

    let current = Memo::new(move |_| {
        let filter = store.filter().get();
        let page = store.page().get();
        store.todos().with(|todos| page_of(todos, filter, page, page_size))
    });

    // Failed toggles leave the list as it was
    let on_toggle = Callback::new(move |todo: Todo| {
        spawn_local(async move {
            match actions::toggle_status(&ctx.backend(), &todo).await {
                Ok(next) => store_update_status(&store, todo.id, next),
                Err(e) => log::debug!("status change for todo {} dropped: {}", todo.id, e),
            }
        });
    });

    let sign_out = move |_| {
        actions::sign_out(&ctx.session);
        ctx.navigate(Route::Login);
    };

    view! {
        <div class="todo-page">
            <div class="todo-card">
                <div class="todo-header">
                    <h2>"To-Do List"</h2>
                    <div class="header-actions">
                        <button class="new-btn" on:click=move |_| ctx.navigate(Route::CreateTodo)>
                            "+ New"
                        </button>
                        <button class="sign-out-btn" on:click=sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </div>

                <div class="filter-bar">
                    {StatusFilter::ALL.iter().map(|filter| {
                        let filter = *filter;
                        view! {
                            <button
                                class=move || if store.filter().get() == filter { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| store_set_filter(&store, filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                {move || if store.loading().get() {
                    view! { <p class="list-status">"Loading..."</p> }.into_any()
                } else if current.with(|page| page.items.is_empty()) {
                    view! { <p class="list-status">"No todos found"</p> }.into_any()
                } else {
                    view! {
                        <ul class="todo-list">
                            <For
                                each=move || current.get().items
                                key=|todo| (todo.id, todo.status)
                                children=move |todo| view! { <TodoRow todo=todo on_toggle=on_toggle /> }
                            />
                        </ul>
                    }.into_any()
                }}

                <div class="pager">
                    <button
                        class="pager-btn"
                        disabled=move || !current.with(|page| page.has_prev())
                        on:click=move |_| store_step_page(&store, -1, page_size)
                    >
                        "Prev"
                    </button>
                    <span>
                        {move || current.with(|page| format!("Page {} of {}", page.page, page.total_pages))}
                    </span>
                    <button
                        class="pager-btn"
                        disabled=move || !current.with(|page| page.has_next())
                        on:click=move |_| store_step_page(&store, 1, page_size)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}
