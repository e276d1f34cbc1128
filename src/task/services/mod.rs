//! Task orchestration services.

mod tasks;

pub use tasks::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
