//! HTTP handlers for the task resource.

use actix_web::{web, HttpResponse};
use log::info;
use serde::Serialize;

use crate::app_state::AppState;
use crate::errors::AppError;
use crate::models::{CreateTaskRequest, Task, TaskQuery, UpdateTaskRequest};
use crate::validation;

/// Response body for list requests.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub success: bool,
    pub data: Vec<Task>,
    pub count: usize,
}

/// Response body for single-task requests. `message` is only present on
/// mutations.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub success: bool,
    pub data: Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Response body for requests that return no task.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /api/tasks
/// List all tasks, optionally filtered by status.
pub async fn list_tasks(
    data: web::Data<AppState>,
    query: web::Query<TaskQuery>,
) -> Result<HttpResponse, AppError> {
    let status = validation::validate_task_query(&query)?;

    let tasks = data.task_service.get_all_tasks(status).await?;

    Ok(HttpResponse::Ok().json(TaskListResponse {
        success: true,
        count: tasks.len(),
        data: tasks,
    }))
}

/// GET /api/tasks/{id}
/// Fetch a single task.
pub async fn get_task(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = validation::validate_task_id(&path.into_inner())?;

    let task = data.task_service.get_task_by_id(id).await?;

    Ok(HttpResponse::Ok().json(TaskResponse {
        success: true,
        data: task,
        message: None,
    }))
}

/// POST /api/tasks
/// Create a new task.
pub async fn create_task(
    data: web::Data<AppState>,
    payload: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, AppError> {
    let create_data = validation::validate_create_task(&payload)?;

    let task = data.task_service.create_task(create_data).await?;
    info!("Task created: {}", task.id);

    Ok(HttpResponse::Created().json(TaskResponse {
        success: true,
        data: task,
        message: Some("Task created successfully"),
    }))
}

/// PUT /api/tasks/{id}
/// Update the supplied fields of an existing task.
pub async fn update_task(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, AppError> {
    let id = validation::validate_task_id(&path.into_inner())?;
    let update_data = validation::validate_update_task(&payload)?;

    let task = data.task_service.update_task(id, update_data).await?;
    info!("Task updated: {}", task.id);

    Ok(HttpResponse::Ok().json(TaskResponse {
        success: true,
        data: task,
        message: Some("Task updated successfully"),
    }))
}

/// DELETE /api/tasks/{id}
/// Delete an existing task.
pub async fn delete_task(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = validation::validate_task_id(&path.into_inner())?;

    data.task_service.delete_task(id).await?;
    info!("Task deleted: {}", id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: "Task deleted successfully",
    }))
}
