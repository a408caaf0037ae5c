//! Request validation, evaluated at the routing boundary before any
//! service logic runs. Violations are collected per field and joined into
//! a single 400 response.

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    CreateTaskData, CreateTaskRequest, TaskQuery, TaskStatus, UpdateTaskData, UpdateTaskRequest,
};

const TITLE_MIN_CHARS: usize = 3;
const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 500;

/// Accumulates (field, message) pairs across all checks of one input shape.
#[derive(Debug, Default)]
struct Violations {
    entries: Vec<(&'static str, String)>,
}

impl Violations {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.push((field, message.into()));
    }

    fn into_result(self) -> Result<(), AppError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let joined = self
            .entries
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join(", ");
        Err(AppError::validation(joined))
    }
}

fn check_title(title: &str, violations: &mut Violations) {
    let length = title.chars().count();
    if length < TITLE_MIN_CHARS {
        violations.push(
            "title",
            format!("must be at least {} characters long", TITLE_MIN_CHARS),
        );
    } else if length > TITLE_MAX_CHARS {
        violations.push(
            "title",
            format!("must not exceed {} characters", TITLE_MAX_CHARS),
        );
    }
}

fn check_description(description: &str, violations: &mut Violations) {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        violations.push(
            "description",
            format!("must not exceed {} characters", DESCRIPTION_MAX_CHARS),
        );
    }
}

fn check_status(raw: Option<&str>, violations: &mut Violations) -> Option<TaskStatus> {
    let raw = raw?;
    let status = TaskStatus::parse(raw);
    if status.is_none() {
        violations.push(
            "status",
            format!("must be one of: {}", TaskStatus::VALUES.join(", ")),
        );
    }
    status
}

/// Validates a create payload: `title` required and length-bounded,
/// `description` length-bounded, `status` in the enumeration when present.
pub fn validate_create_task(payload: &CreateTaskRequest) -> Result<CreateTaskData, AppError> {
    let mut violations = Violations::new();

    match payload.title.as_deref() {
        Some(title) => check_title(title, &mut violations),
        None => violations.push("title", "is required"),
    }
    if let Some(description) = payload.description.as_deref() {
        check_description(description, &mut violations);
    }
    let status = check_status(payload.status.as_deref(), &mut violations);

    violations.into_result()?;

    Ok(CreateTaskData {
        title: payload.title.clone().unwrap_or_default(),
        description: payload.description.clone(),
        status,
    })
}

/// Validates an update payload: same per-field constraints as create, but
/// every field optional. Absent fields stay absent.
pub fn validate_update_task(payload: &UpdateTaskRequest) -> Result<UpdateTaskData, AppError> {
    let mut violations = Violations::new();

    if let Some(title) = payload.title.as_deref() {
        check_title(title, &mut violations);
    }
    if let Some(description) = payload.description.as_deref() {
        check_description(description, &mut violations);
    }
    let status = check_status(payload.status.as_deref(), &mut violations);

    violations.into_result()?;

    Ok(UpdateTaskData {
        title: payload.title.clone(),
        description: payload.description.clone(),
        status,
    })
}

/// Validates the `id` path segment. A malformed id is a 400, never a 404.
pub fn validate_task_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::validation("id: must be a valid UUID"))
}

/// Validates the optional `status` filter on list requests.
pub fn validate_task_query(query: &TaskQuery) -> Result<Option<TaskStatus>, AppError> {
    let mut violations = Violations::new();
    let status = check_status(query.status.as_deref(), &mut violations);
    violations.into_result()?;
    Ok(status)
}
