mod task;

pub use task::{
    CreateTaskData, CreateTaskRequest, Task, TaskQuery, TaskStatus, UpdateTaskData,
    UpdateTaskRequest,
};
