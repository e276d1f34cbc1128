//! Owner-scoped task operations.

use crate::auth::{AuthenticatedUser, OwnershipGrant};
use crate::error::ErrorKind;
use crate::task::{
    domain::{ListingScope, Task, TaskDomainError, TaskDraft, TaskEdit, TaskKeyword, TaskTitle},
    ports::{TaskOwnershipStore, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the given title and no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload replacing a task's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    is_done: bool,
}

impl UpdateTaskRequest {
    /// Creates a request with the given title and completion flag. The
    /// description is cleared unless set with [`Self::with_description`].
    #[must_use]
    pub fn new(title: impl Into<String>, is_done: bool) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_done,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Errors returned by [`TaskService`].
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// Input failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The store rejected or failed the operation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns the caller-facing classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::InvalidInput,
            Self::Repository(TaskRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::StoreError,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

fn log_store_failure(err: &TaskRepositoryError) {
    if !matches!(err, TaskRepositoryError::NotFound(_)) {
        error!(error = %err, "task store operation failed");
    }
}

/// Task operations behind the auth gate.
///
/// Listing and creation need an [`AuthenticatedUser`]; everything that
/// touches a specific task needs an [`OwnershipGrant`] for it.
#[derive(Debug)]
pub struct TaskService<S, C>
where
    S: TaskRepository + TaskOwnershipStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    scope: ListingScope,
}

impl<S, C> Clone for TaskService<S, C>
where
    S: TaskRepository + TaskOwnershipStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            scope: self.scope,
        }
    }
}

impl<S, C> TaskService<S, C>
where
    S: TaskRepository + TaskOwnershipStore,
    C: Clock + Send + Sync,
{
    /// Creates a service listing tasks with the default owner scope.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_scope(store, clock, ListingScope::Owned)
    }

    /// Creates a service with an explicit listing scope.
    #[must_use]
    pub const fn with_scope(store: Arc<S>, clock: Arc<C>, scope: ListingScope) -> Self {
        Self {
            store,
            clock,
            scope,
        }
    }

    /// Returns the configured listing scope.
    #[must_use]
    pub const fn scope(&self) -> ListingScope {
        self.scope
    }

    /// Lists tasks visible to `user`, oldest first.
    ///
    /// A blank or absent keyword returns the unfiltered listing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list(
        &self,
        user: &AuthenticatedUser,
        keyword: Option<&str>,
    ) -> TaskServiceResult<Vec<Task>> {
        let filter = keyword.and_then(TaskKeyword::parse);
        let tasks = match self.scope {
            ListingScope::Owned => self.store.list_owned(user.user_id(), filter).await,
            ListingScope::All => self.store.list_all(filter).await,
        }
        .inspect_err(log_store_failure)?;
        Ok(tasks)
    }

    /// Creates a task owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is blank, or
    /// [`TaskServiceError::Repository`] when the store fails; nothing is
    /// stored in either case.
    pub async fn create(
        &self,
        owner: &AuthenticatedUser,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest { title, description } = request;
        let draft = TaskDraft::new(TaskTitle::new(title)?, description, &*self.clock);
        let task_id = self
            .store
            .create_owned_task(owner.user_id(), &draft)
            .await
            .inspect_err(log_store_failure)?;
        info!(user_id = %owner.user_id(), task_id = %task_id, "task created");
        Ok(Task::from_draft(task_id, &draft))
    }

    /// Loads the granted task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task
    /// vanished after the grant was issued.
    pub async fn get(&self, grant: &OwnershipGrant) -> TaskServiceResult<Task> {
        let task_id = grant.task_id();
        let task = self
            .store
            .find_by_id(task_id)
            .await
            .inspect_err(log_store_failure)?;
        task.ok_or_else(|| TaskRepositoryError::NotFound(task_id).into())
    }

    /// Replaces the granted task's title, description, and completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is blank, or
    /// [`TaskServiceError::Repository`] when the task vanished or the store
    /// fails.
    pub async fn update(
        &self,
        grant: &OwnershipGrant,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<()> {
        let UpdateTaskRequest {
            title,
            description,
            is_done,
        } = request;
        let edit = TaskEdit::new(TaskTitle::new(title)?, description, is_done);
        self.store
            .update(grant.task_id(), &edit)
            .await
            .inspect_err(log_store_failure)?;
        Ok(())
    }

    /// Deletes the granted task and its ownership record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn delete(&self, grant: OwnershipGrant) -> TaskServiceResult<()> {
        let (user, task_id) = grant.into_parts();
        self.store
            .delete(task_id)
            .await
            .inspect_err(log_store_failure)?;
        info!(user_id = %user.user_id(), task_id = %task_id, "task deleted");
        Ok(())
    }
}
