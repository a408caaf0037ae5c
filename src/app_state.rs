use crate::service::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub task_service: TaskService,
}
