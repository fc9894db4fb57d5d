//! Screen Actions
//!
//! What each screen does when the user submits or clicks, kept apart from
//! the DOM so it runs against any backend and storage.

use crate::api::{AuthApi, TodoApi};
use crate::error::ApiResult;
use crate::forms::{SignupForm, TodoForm};
use crate::models::{SignInRequest, Todo, TodoStatus};
use crate::session::{KeyValueStorage, Session};

/// Sign in and remember the returned user id. Nothing is stored on failure.
pub async fn sign_in<A, S>(api: &A, session: &Session<S>, credentials: &SignInRequest) -> ApiResult<String>
where
    A: AuthApi + ?Sized,
    S: KeyValueStorage,
{
    let response = api.sign_in(credentials).await?;
    session.sign_in(&response.id)?;
    log::info!("signed in as user {}", response.id);
    Ok(response.id)
}

pub async fn sign_up<A: AuthApi + ?Sized>(api: &A, form: &SignupForm) -> ApiResult<()> {
    api.sign_up(&form.to_request()).await?;
    log::info!("account created for {}", form.mobile);
    Ok(())
}

pub async fn load_todos<A: TodoApi + ?Sized>(api: &A, user_id: &str) -> ApiResult<Vec<Todo>> {
    let todos = api.list_todos(user_id).await?;
    log::debug!("loaded {} todos for user {}", todos.len(), user_id);
    Ok(todos)
}

/// Flip a todo's status on the backend; returns the status it now has.
pub async fn toggle_status<A: TodoApi + ?Sized>(api: &A, todo: &Todo) -> ApiResult<TodoStatus> {
    let next = todo.status.toggled();
    api.set_status(todo.id, next).await?;
    Ok(next)
}

pub async fn create_todo<A: TodoApi + ?Sized>(api: &A, user_id: &str, form: &TodoForm) -> ApiResult<()> {
    let body = form.to_request(user_id)?;
    api.create_todo(&body).await?;
    log::info!("created todo {:?}", body.name);
    Ok(())
}

pub fn sign_out<S: KeyValueStorage>(session: &Session<S>) {
    session.sign_out();
    log::info!("signed out");
}
