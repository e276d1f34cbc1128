//! Ownership port: the only path for creating tasks and for owner-scoped
//! lookups.

use super::TaskRepositoryResult;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskKeyword};
use crate::user::domain::UserId;
use async_trait::async_trait;

/// Task ownership contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskOwnershipStore: Send + Sync {
    /// Stores a task and its ownership record atomically and returns the
    /// store-assigned task identifier.
    ///
    /// Either both rows exist afterwards or neither does.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::Persistence`] when either insert
    /// fails; the transaction is rolled back in that case.
    async fn create_owned_task(&self, owner: UserId, draft: &TaskDraft)
    -> TaskRepositoryResult<TaskId>;

    /// Lists tasks owned by `owner`, oldest first, optionally filtered by a
    /// keyword.
    async fn list_owned(
        &self,
        owner: UserId,
        keyword: Option<TaskKeyword>,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Lists every stored task regardless of owner, oldest first.
    async fn list_all(&self, keyword: Option<TaskKeyword>) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns `true` when an ownership record links `user_id` to `task_id`.
    ///
    /// A missing task reads as `false`.
    async fn is_owner(&self, user_id: UserId, task_id: TaskId) -> TaskRepositoryResult<bool>;

    /// Removes the ownership record for a task. Missing records are ignored.
    async fn delete_ownership(&self, task_id: TaskId) -> TaskRepositoryResult<()>;
}
