use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of states a task can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Wire-format names, in declaration order.
    pub const VALUES: [&'static str; 3] = ["pending", "in_progress", "completed"];

    /// Parses the wire-format name, returning `None` for anything outside
    /// the enumeration.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// The Task model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw request payload for creating a task. All fields are optional so the
/// validation layer can report missing ones field by field.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Raw request payload for updating a task.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Query parameters accepted when listing tasks.
#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    pub status: Option<String>,
}

/// Validated creation data handed to the repository. `description` and
/// `status` are still optional here; the repository applies the defaults.
#[derive(Debug, Clone)]
pub struct CreateTaskData {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Validated update data. Absent fields leave the stored values untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}
