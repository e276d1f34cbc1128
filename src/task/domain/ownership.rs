//! The authorization-bearing link between a user and a task.

use super::TaskId;
use crate::user::domain::UserId;

/// Pairs a task with the user who created it.
///
/// Every stored task has exactly one ownership record, created in the same
/// transaction as the task and removed together with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ownership {
    user_id: UserId,
    task_id: TaskId,
}

impl Ownership {
    /// Creates an ownership record.
    #[must_use]
    pub const fn new(user_id: UserId, task_id: TaskId) -> Self {
        Self { user_id, task_id }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the owned task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns `true` when this record grants `user_id` access.
    #[must_use]
    pub fn is_held_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
