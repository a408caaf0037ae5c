//! Application service: the "resource must exist" rule lives here, turning
//! repository absence into typed 404s. Everything else passes through.

use std::sync::Arc;

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateTaskData, Task, TaskStatus, UpdateTaskData};
use crate::repository::{RepositoryError, TaskRepository};

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::internal(err.to_string())
    }
}

#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>, AppError> {
        Ok(self.repository.find_all(status).await?)
    }

    pub async fn get_task_by_id(&self, id: Uuid) -> Result<Task, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task with ID {} not found", id)))
    }

    pub async fn create_task(&self, data: CreateTaskData) -> Result<Task, AppError> {
        Ok(self.repository.create(data).await?)
    }

    pub async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, AppError> {
        self.repository
            .update(id, data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task with ID {} not found", id)))
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Task with ID {} not found", id)))
        }
    }
}
