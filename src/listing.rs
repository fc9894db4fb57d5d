//! Listing Utilities
//!
//! Client-side status filtering and pagination over an already-fetched list.

use crate::models::{Todo, TodoStatus};

/// Default number of todos per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Status filter shown above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TodoStatus),
}

impl StatusFilter {
    /// Filter buttons in display order
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Only(TodoStatus::Completed),
        StatusFilter::Only(TodoStatus::InProgress),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => todo.status == *status,
        }
    }
}

pub fn filter_todos(todos: &[Todo], filter: StatusFilter) -> Vec<Todo> {
    todos.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// `max(1, ceil(len / page_size))`
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Clamp a 1-indexed page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One rendered page of the list
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Todo>,
    pub page: usize,
    pub total_pages: usize,
}

impl PageView {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter, then cut out the requested page
pub fn page_of(todos: &[Todo], filter: StatusFilter, page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let filtered = filter_todos(todos, filter);
    let total_pages = total_pages(filtered.len(), page_size);
    let page = clamp_page(page, total_pages);
    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();
    PageView { items, page, total_pages }
}

#[cfg(test)]
pub(crate) fn make_todo(id: i64, status: TodoStatus) -> Todo {
    Todo {
        id,
        name: format!("Todo {}", id),
        description: String::new(),
        time: "2025-01-01T09:00".to_string(),
        status,
    }
}
