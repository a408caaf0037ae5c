//! Storage contract for tasks and its in-memory adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CreateTaskData, Task, TaskStatus, UpdateTaskData};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Infrastructure-level failures. Domain outcomes (absence, no-op deletes)
/// are expressed in the return types, never through this error.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("storage backend failure: {0}")]
    Storage(String),
}

/// Task persistence contract. Only the in-memory adapter exists today; the
/// trait is the seam a persistent backend would plug into.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns all stored tasks, or only those matching the status filter.
    async fn find_all(&self, status: Option<TaskStatus>) -> RepositoryResult<Vec<Task>>;

    /// Exact-match lookup. Returns `None` when the id is unknown.
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Task>>;

    /// Allocates a fresh id, applies field defaults, stamps both timestamps
    /// with the same instant, stores and returns the new task.
    async fn create(&self, data: CreateTaskData) -> RepositoryResult<Task>;

    /// Applies only the fields present in `data` and refreshes `updated_at`.
    /// Returns `None` when the id is unknown.
    async fn update(&self, id: Uuid, data: UpdateTaskData) -> RepositoryResult<Option<Task>>;

    /// Removes the task if present. Reports whether a removal occurred.
    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;

    /// Empties the store. Test and reset affordance; not routed over HTTP.
    async fn clear(&self) -> RepositoryResult<()>;
}

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self, status: Option<TaskStatus>) -> RepositoryResult<Vec<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|err| RepositoryError::Storage(err.to_string()))?;

        let mut result: Vec<Task> = tasks
            .values()
            .filter(|task| status.map_or(true, |wanted| task.status == wanted))
            .cloned()
            .collect();
        // Keep listing order stable across calls within a process run.
        result.sort_by_key(|task| task.created_at);
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|err| RepositoryError::Storage(err.to_string()))?;
        Ok(tasks.get(&id).cloned())
    }

    async fn create(&self, data: CreateTaskData) -> RepositoryResult<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description.unwrap_or_default(),
            status: data.status.unwrap_or(TaskStatus::Pending),
            created_at: now,
            updated_at: now,
        };

        let mut tasks = self
            .tasks
            .write()
            .map_err(|err| RepositoryError::Storage(err.to_string()))?;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: Uuid, data: UpdateTaskData) -> RepositoryResult<Option<Task>> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|err| RepositoryError::Storage(err.to_string()))?;

        let Some(task) = tasks.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = data.title {
            task.title = title;
        }
        if let Some(description) = data.description {
            task.description = description;
        }
        if let Some(status) = data.status {
            task.status = status;
        }
        task.updated_at = Utc::now();

        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|err| RepositoryError::Storage(err.to_string()))?;
        Ok(tasks.remove(&id).is_some())
    }

    async fn clear(&self) -> RepositoryResult<()> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|err| RepositoryError::Storage(err.to_string()))?;
        tasks.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_data(title: &str) -> CreateTaskData {
        CreateTaskData {
            title: title.to_string(),
            description: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn create_applies_defaults_and_stamps_both_timestamps() {
        let repo = InMemoryTaskRepository::new();

        let task = repo.create(create_data("Write docs")).await.unwrap();

        assert_eq!(task.title, "Write docs");
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[tokio::test]
    async fn create_keeps_supplied_description_and_status() {
        let repo = InMemoryTaskRepository::new();

        let task = repo
            .create(CreateTaskData {
                title: "Ship release".to_string(),
                description: Some("cut the tag".to_string()),
                status: Some(TaskStatus::InProgress),
            })
            .await
            .unwrap();

        assert_eq!(task.description, "cut the tag");
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[tokio::test]
    async fn created_task_round_trips_through_find_by_id() {
        let repo = InMemoryTaskRepository::new();

        let created = repo.create(create_data("Round trip")).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_an_unknown_id() {
        let repo = InMemoryTaskRepository::new();

        let found = repo.find_by_id(Uuid::nil()).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn find_all_returns_every_stored_task() {
        let repo = InMemoryTaskRepository::new();
        let first = repo.create(create_data("First")).await.unwrap();
        let second = repo.create(create_data("Second")).await.unwrap();

        let all = repo.find_all(None).await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|t| t.id == first.id));
        assert!(all.iter().any(|t| t.id == second.id));
    }

    #[tokio::test]
    async fn find_all_filters_by_status() {
        let repo = InMemoryTaskRepository::new();
        repo.create(create_data("Pending one")).await.unwrap();
        repo.create(CreateTaskData {
            title: "Done one".to_string(),
            description: None,
            status: Some(TaskStatus::Completed),
        })
        .await
        .unwrap();

        let pending = repo.find_all(Some(TaskStatus::Pending)).await.unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Pending one");
    }

    #[tokio::test]
    async fn find_all_returns_empty_when_the_store_is_empty() {
        let repo = InMemoryTaskRepository::new();

        assert!(repo.find_all(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_the_supplied_fields() {
        let repo = InMemoryTaskRepository::new();
        let created = repo
            .create(CreateTaskData {
                title: "Original title".to_string(),
                description: Some("original description".to_string()),
                status: None,
            })
            .await
            .unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateTaskData {
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("task exists");

        assert_eq!(updated.title, "Original title");
        assert_eq!(updated.description, "original description");
        assert_eq!(updated.status, TaskStatus::Completed);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_returns_none_for_an_unknown_id() {
        let repo = InMemoryTaskRepository::new();

        let updated = repo.update(Uuid::nil(), UpdateTaskData::default()).await.unwrap();

        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn delete_removes_the_task_and_reports_the_outcome() {
        let repo = InMemoryTaskRepository::new();
        let created = repo.create(create_data("Disposable")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let repo = InMemoryTaskRepository::new();
        repo.create(create_data("One")).await.unwrap();
        repo.create(create_data("Two")).await.unwrap();

        repo.clear().await.unwrap();

        assert!(repo.find_all(None).await.unwrap().is_empty());
    }
}
