//! Form State
//!
//! Per-screen input state and its conversion into request bodies.

use leptos::prelude::*;

use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, SignUpRequest, TodoStatus};

/// Gender radio options
pub const GENDERS: &[&str] = &["male", "female", "other"];

/// Country select options (value, label)
pub const COUNTRIES: &[(&str, &str)] = &[
    ("India", "India"),
    ("SriLanka", "Sri Lanka"),
    ("Japan", "Japan"),
];

/// Hobby checkbox options
pub const HOBBIES: &[&str] = &["Music", "Sports", "Painting"];

/// Todo status select options (value, label)
pub const STATUS_OPTIONS: &[(TodoStatus, &str)] = &[
    (TodoStatus::InProgress, "In Progress"),
    (TodoStatus::Completed, "Completed"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub mobile: String,
    pub gender: String,
    pub country: String,
    /// Checked hobbies in the order they were ticked
    pub hobbies: Vec<String>,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn set_hobby(&mut self, hobby: &str, checked: bool) {
        if checked {
            if !self.has_hobby(hobby) {
                self.hobbies.push(hobby.to_string());
            }
        } else {
            self.hobbies.retain(|h| h != hobby);
        }
    }

    pub fn has_hobby(&self, hobby: &str) -> bool {
        self.hobbies.iter().any(|h| h == hobby)
    }

    pub fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            name: self.name.clone(),
            mobile: self.mobile.clone(),
            gender: self.gender.clone(),
            country: self.country.clone(),
            hobbies: self.hobbies.join(","),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoForm {
    pub name: String,
    pub description: String,
    /// `datetime-local` input value
    pub time: String,
    pub status: TodoStatus,
}

impl TodoForm {
    /// Build the create body owned by `user_id`; the stored id must be an integer.
    pub fn to_request(&self, user_id: &str) -> ApiResult<NewTodo> {
        let user_id = user_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidSession(user_id.to_string()))?;
        Ok(NewTodo {
            name: self.name.clone(),
            description: self.description.clone(),
            time: self.time.clone(),
            status: self.status,
            user_id,
        })
    }
}

/// Mark a form submit as in flight. Returns false while one is already running.
pub fn begin_submit(loading: ReadSignal<bool>, set_loading: WriteSignal<bool>) -> bool {
    if loading.get_untracked() {
        return false;
    }
    set_loading.set(true);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hobbies_join_in_tick_order() {
        let mut form = SignupForm::default();
        form.set_hobby("Painting", true);
        form.set_hobby("Music", true);
        form.set_hobby("Music", true);
        assert_eq!(form.to_request().hobbies, "Painting,Music");

        form.set_hobby("Painting", false);
        assert_eq!(form.to_request().hobbies, "Music");
        assert!(!form.has_hobby("Painting"));
    }

    #[test]
    fn test_no_hobbies_is_empty_string() {
        let body = serde_json::to_value(SignupForm::default().to_request()).unwrap();
        assert_eq!(body["hobbies"], "");
    }

    #[test]
    fn test_todo_form_defaults_to_in_progress() {
        let form = TodoForm { name: "Read".into(), ..Default::default() };
        let body = form.to_request("5").unwrap();
        assert_eq!(body.status, TodoStatus::InProgress);
        assert_eq!(body.user_id, 5);
    }

    #[test]
    fn test_todo_form_rejects_non_numeric_owner() {
        let err = TodoForm::default().to_request("abc").unwrap_err();
        assert_eq!(err, ApiError::InvalidSession("abc".into()));
    }

    #[test]
    fn test_second_submit_is_ignored_while_in_flight() {
        let owner = Owner::new();
        owner.with(|| {
            let (loading, set_loading) = signal(false);
            assert!(begin_submit(loading, set_loading));
            assert!(loading.get_untracked());
            assert!(!begin_submit(loading, set_loading));

            set_loading.set(false);
            assert!(begin_submit(loading, set_loading));
        });
    }
}
