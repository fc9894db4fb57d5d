//! UI Components
//!
//! One page component per screen, plus the session guard.

mod require_session;
mod login_page;
mod signup_page;
mod todo_list_page;
mod todo_row;
mod create_todo_page;

pub use require_session::RequireSession;
pub use login_page::LoginPage;
pub use signup_page::SignupPage;
pub use todo_list_page::TodoListPage;
pub use todo_row::TodoRow;
pub use create_todo_page::CreateTodoPage;
