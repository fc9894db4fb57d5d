//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::listing::{clamp_page, total_pages, StatusFilter};
use crate::models::{Todo, TodoStatus};

/// State of the todo list screen
#[derive(Clone, Debug, Store)]
pub struct TodoListState {
    /// Todos fetched for the session owner
    pub todos: Vec<Todo>,
    /// Active status filter
    pub filter: StatusFilter,
    /// Current page, 1-indexed
    pub page: usize,
    /// True until the initial fetch settles
    pub loading: bool,
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            filter: StatusFilter::All,
            page: 1,
            loading: true,
        }
    }
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type TodoListStore = Store<TodoListState>;

// ========================
// State Transitions
// ========================

/// Replace a todo's status in place. Returns false if the id is unknown.
pub fn update_status(todos: &mut [Todo], id: i64, status: TodoStatus) -> bool {
    match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.status = status;
            true
        }
        None => false,
    }
}

/// Move `delta` pages from the page currently shown, staying within the filtered list.
///
/// `page` may point past the end if the list shrank; it is clamped first so the
/// step starts from what is on screen.
pub fn step_page(todos: &[Todo], filter: StatusFilter, page: usize, delta: isize, page_size: usize) -> usize {
    let matching = todos.iter().filter(|t| filter.matches(t)).count();
    let last = total_pages(matching, page_size);
    clamp_page(page, last).saturating_add_signed(delta).clamp(1, last)
}

// ========================
// Store Helper Functions
// ========================

/// Install freshly fetched todos and end loading
pub fn store_set_todos(store: &TodoListStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
    *store.loading().write() = false;
}

pub fn store_finish_loading(store: &TodoListStore) {
    *store.loading().write() = false;
}

/// Change the filter; always returns to page 1
pub fn store_set_filter(store: &TodoListStore, filter: StatusFilter) {
    *store.filter().write() = filter;
    *store.page().write() = 1;
}

pub fn store_step_page(store: &TodoListStore, delta: isize, page_size: usize) {
    let filter = store.filter().get();
    let page = store.page().get();
    let next = store.todos().with(|todos| step_page(todos, filter, page, delta, page_size));
    *store.page().write() = next;
}

/// Reflect a confirmed status change in the local copy
pub fn store_update_status(store: &TodoListStore, id: i64, status: TodoStatus) {
    update_status(&mut store.todos().write(), id, status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{make_todo, page_of};

    #[test]
    fn test_new_state_is_loading_on_first_page() {
        let state = TodoListState::new();
        assert!(state.loading);
        assert_eq!(state.page, 1);
        assert_eq!(state.filter, StatusFilter::All);
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_update_status() {
        let mut todos = vec![make_todo(1, TodoStatus::Completed), make_todo(2, TodoStatus::InProgress)];
        assert!(update_status(&mut todos, 1, TodoStatus::InProgress));
        assert_eq!(todos[0].status, TodoStatus::InProgress);
        assert_eq!(todos[1].status, TodoStatus::InProgress);
        assert!(!update_status(&mut todos, 99, TodoStatus::Completed));
    }

    #[test]
    fn test_step_page_stays_in_range() {
        let todos: Vec<_> = (1..=12).map(|id| make_todo(id, TodoStatus::InProgress)).collect();
        assert_eq!(step_page(&todos, StatusFilter::All, 1, 1, 5), 2);
        assert_eq!(step_page(&todos, StatusFilter::All, 3, 1, 5), 3);
        assert_eq!(step_page(&todos, StatusFilter::All, 1, -1, 5), 1);
        assert_eq!(step_page(&todos, StatusFilter::Only(TodoStatus::Completed), 2, 1, 5), 1);
    }

    #[test]
    fn test_prev_after_list_shrinks_steps_from_shown_page() {
        let mut todos: Vec<_> = (1..=11).map(|id| make_todo(id, TodoStatus::Completed)).collect();
        let completed = StatusFilter::Only(TodoStatus::Completed);
        assert_eq!(step_page(&todos, completed, 2, 1, 5), 3);

        // 10 left under the filter, so page 3 now renders as page 2
        update_status(&mut todos, 11, TodoStatus::InProgress);
        assert_eq!(page_of(&todos, completed, 3, 5).page, 2);
        assert_eq!(step_page(&todos, completed, 3, -1, 5), 1);
    }

    #[test]
    fn test_store_prev_after_toggle_under_filter() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(TodoListState::new());
            store_set_todos(&store, (1..=11).map(|id| make_todo(id, TodoStatus::Completed)).collect());
            store_set_filter(&store, StatusFilter::Only(TodoStatus::Completed));
            store_step_page(&store, 1, 5);
            store_step_page(&store, 1, 5);
            assert_eq!(store.page().get(), 3);

            store_update_status(&store, 11, TodoStatus::InProgress);
            store_step_page(&store, -1, 5);
            assert_eq!(store.page().get(), 1);
        });
    }

    #[test]
    fn test_filter_change_returns_to_first_page() {
        let owner = Owner::new();
        owner.with(|| {
            let todos: Vec<_> = (1..=12)
                .map(|id| make_todo(id, if id <= 6 { TodoStatus::Completed } else { TodoStatus::InProgress }))
                .collect();
            let store = Store::new(TodoListState::new());
            store_set_todos(&store, todos);
            assert!(!store.loading().get());

            store_step_page(&store, 1, 5);
            store_step_page(&store, 1, 5);
            assert_eq!(store.page().get(), 3);

            store_set_filter(&store, StatusFilter::Only(TodoStatus::Completed));
            assert_eq!(store.page().get(), 1);
            let view = page_of(&store.todos().get(), store.filter().get(), store.page().get(), 5);
            let ids: Vec<i64> = view.items.iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);

            store_set_filter(&store, StatusFilter::All);
            assert_eq!(store.todos().with(|t| t.len()), 12);

            store_update_status(&store, 7, TodoStatus::Completed);
            assert_eq!(store.todos().with(|t| t[6].status), TodoStatus::Completed);
        });
    }
}
