//! Todo Endpoints

use async_trait::async_trait;

use super::{ensure_success, HttpBackend};
use crate::error::ApiResult;
use crate::models::{NewTodo, StatusPatch, Todo, TodoStatus};

pub const TODOS_PATH: &str = "/todos";

pub fn user_todos_path(user_id: &str) -> String {
    format!("{}/{}", TODOS_PATH, user_id)
}

pub fn todos_path(id: i64) -> String {
    format!("{}/{}", TODOS_PATH, id)
}

/// Todo operations offered by the backend
#[async_trait(?Send)]
pub trait TodoApi {
    /// All todos owned by a user
    async fn list_todos(&self, user_id: &str) -> ApiResult<Vec<Todo>>;

    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<()>;

    /// Single-field status update
    async fn set_status(&self, id: i64, status: TodoStatus) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl TodoApi for HttpBackend {
    async fn list_todos(&self, user_id: &str) -> ApiResult<Vec<Todo>> {
        let response = self.client().get(self.url(&user_todos_path(user_id))).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Vec<Todo>>().await?)
    }

    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<()> {
        let response = self.client().post(self.url(TODOS_PATH)).json(todo).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn set_status(&self, id: i64, status: TodoStatus) -> ApiResult<()> {
        let response = self
            .client()
            .patch(self.url(&todos_path(id)))
            .json(&StatusPatch { status })
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
