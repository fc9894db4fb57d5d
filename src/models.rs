//! Frontend Models
//!
//! Data structures matching backend request and response bodies.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Todo completion status (wire names match backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TodoStatus {
    #[serde(rename = "Completed")]
    Completed,
    #[default]
    #[serde(rename = "In-progress")]
    InProgress,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Completed => "Completed",
            TodoStatus::InProgress => "In-progress",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Completed" => TodoStatus::Completed,
            _ => TodoStatus::InProgress,
        }
    }

    /// The status a toggle moves to
    pub fn toggled(&self) -> Self {
        match self {
            TodoStatus::Completed => TodoStatus::InProgress,
            TodoStatus::InProgress => TodoStatus::Completed,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TodoStatus::Completed)
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub time: String,
    pub status: TodoStatus,
}

impl Todo {
    /// Scheduled time for display, `YYYY-MM-DD HH:MM`.
    ///
    /// RFC 3339 values are shown in the browser's local zone; `datetime-local`
/// values are already local. Anything else is shown as-is.
    pub fn display_time(&self) -> String {
        format_time(&self.time)
    }
}

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_time(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignInRequest {
    pub mobile: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub mobile: String,
    pub gender: String,
    pub country: String,
    /// Comma-joined hobby names
    pub hobbies: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub name: String,
    pub description: String,
    pub time: String,
    pub status: TodoStatus,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusPatch {
    pub status: TodoStatus,
}

// ========================
// Response Bodies
// ========================

/// Successful sign-in response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignInResponse {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
}

/// Backend ids may arrive as JSON numbers or strings
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Int(n) => Ok(n.to_string()),
        RawId::Text(s) => Ok(s),
    }
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<MessageField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageField {
    One(String),
    Many(Vec<String>),
}

impl ErrorBody {
    /// Pull a displayable message out of a raw response body
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        let message = match parsed.message? {
            MessageField::One(s) => s,
            MessageField::Many(list) => list.join(", "),
        };
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(TodoStatus::InProgress).unwrap(), json!("In-progress"));
        let todo: Todo = serde_json::from_value(json!({
            "id": 7,
            "name": "Laundry",
            "description": "whites",
            "time": "2025-01-02T10:30",
            "status": "Completed"
        }))
        .unwrap();
        assert_eq!(todo.status, TodoStatus::Completed);
        assert_eq!(todo.status.toggled(), TodoStatus::InProgress);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Todo, _> = serde_json::from_value(json!({
            "id": 1, "name": "a", "description": "b", "time": "t", "status": "done"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_sign_in_id_number_or_string() {
        let n: SignInResponse = serde_json::from_value(json!({"id": 42})).unwrap();
        let s: SignInResponse = serde_json::from_value(json!({"id": "42"})).unwrap();
        assert_eq!(n.id, "42");
        assert_eq!(s.id, "42");
    }

    #[test]
    fn test_new_todo_wire_shape() {
        let body = NewTodo {
            name: "Gym".to_string(),
            description: "legs".to_string(),
            time: "2025-03-01T07:00".to_string(),
            status: TodoStatus::default(),
            user_id: 3,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "Gym",
                "description": "legs",
                "time": "2025-03-01T07:00",
                "status": "In-progress",
                "userId": 3
            })
        );
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(ErrorBody::message_from(r#"{"message":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
        assert_eq!(
            ErrorBody::message_from(r#"{"message":["email must be an email","password too short"]}"#).as_deref(),
            Some("email must be an email, password too short")
        );
        assert_eq!(ErrorBody::message_from(r#"{"statusCode":500}"#), None);
        assert_eq!(ErrorBody::message_from("<html>bad gateway</html>"), None);
        assert_eq!(ErrorBody::message_from(r#"{"message":""}"#), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2025-01-02T10:30"), "2025-01-02 10:30");
        assert_eq!(format_time("2025-01-02T10:30:15"), "2025-01-02 10:30");
        assert_eq!(format_time("tomorrow"), "tomorrow");
    }

    #[test]
    fn test_offset_time_is_shown_in_local_zone() {
        let raw = "2025-01-02T10:30:00+05:30";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .naive_local()
            .format("%Y-%m-%d %H:%M")
            .to_string();
        assert_eq!(format_time(raw), expected);

        // Same instant written in UTC renders identically
        assert_eq!(format_time("2025-01-02T05:00:00Z"), expected);
    }

    #[test]
    fn test_todo_id_beyond_u32() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 5_000_000_000i64,
            "name": "Archive",
            "description": "",
            "time": "2025-01-02T10:30",
            "status": "In-progress"
        }))
        .unwrap();
        assert_eq!(todo.id, 5_000_000_000);
        assert_eq!(crate::api::todos_path(todo.id), "/todos/5000000000");
    }
}
