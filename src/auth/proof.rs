//! Proof values issued by the auth gate.

use crate::task::domain::TaskId;
use crate::user::domain::UserId;

/// A user whose session has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthenticatedUser {
    user_id: UserId,
}

impl AuthenticatedUser {
    pub(crate) const fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Returns the authenticated user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}

/// Evidence that a user owned a task at the time of the check.
///
/// Grants are consumed by delete and borrowed by read and edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnershipGrant {
    user: AuthenticatedUser,
    task_id: TaskId,
}

impl OwnershipGrant {
    pub(crate) const fn new(user: AuthenticatedUser, task_id: TaskId) -> Self {
        Self { user, task_id }
    }

    /// Returns the user the grant was issued to.
    #[must_use]
    pub const fn user(&self) -> AuthenticatedUser {
        self.user
    }

    /// Returns the granted task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Consumes the grant, returning its parts.
    #[must_use]
    pub const fn into_parts(self) -> (AuthenticatedUser, TaskId) {
        (self.user, self.task_id)
    }
}
