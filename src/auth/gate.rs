//! Session and ownership checks.

use super::{AuthenticatedUser, OwnershipGrant};
use crate::error::ErrorKind;
use crate::session::domain::Session;
use crate::task::{
    domain::TaskId,
    ports::{TaskOwnershipStore, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

/// Authentication state of an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No valid session.
    Unauthenticated,
    /// A session bound to a user.
    Authenticated(AuthenticatedUser),
}

impl AuthState {
    /// Derives the state from a resolved session.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        session.user_id().map_or(Self::Unauthenticated, |id| {
            Self::Authenticated(AuthenticatedUser::new(id))
        })
    }
}

/// Errors returned by the auth gate.
#[derive(Debug, Clone, Error)]
pub enum AuthGateError {
    /// The request carries no valid session.
    #[error("authentication required")]
    Unauthenticated,

    /// The user does not own the task, or the task does not exist.
    #[error("task {0} is not accessible")]
    Forbidden(TaskId),

    /// The ownership lookup failed.
    #[error(transparent)]
    Store(#[from] TaskRepositoryError),
}

impl AuthGateError {
    /// Returns the caller-facing classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthenticated => ErrorKind::AuthenticationFailure,
            Self::Forbidden(_) => ErrorKind::AuthorizationFailure,
            Self::Store(_) => ErrorKind::StoreError,
        }
    }
}

/// Turns a session into an [`AuthenticatedUser`].
///
/// # Errors
///
/// Returns [`AuthGateError::Unauthenticated`] for an anonymous session.
pub fn require_authenticated(session: &Session) -> Result<AuthenticatedUser, AuthGateError> {
    match AuthState::of(session) {
        AuthState::Authenticated(user) => Ok(user),
        AuthState::Unauthenticated => {
            warn!("request without a valid session denied");
            Err(AuthGateError::Unauthenticated)
        }
    }
}

/// Ownership gate backed by a [`TaskOwnershipStore`].
#[derive(Debug)]
pub struct AuthGate<O>
where
    O: TaskOwnershipStore,
{
    ownership: Arc<O>,
}

impl<O> Clone for AuthGate<O>
where
    O: TaskOwnershipStore,
{
    fn clone(&self) -> Self {
        Self {
            ownership: Arc::clone(&self.ownership),
        }
    }
}

impl<O> AuthGate<O>
where
    O: TaskOwnershipStore,
{
    /// Creates a gate over the given ownership store.
    #[must_use]
    pub const fn new(ownership: Arc<O>) -> Self {
        Self { ownership }
    }

    /// Checks that `user` owns `task_id`.
    ///
    /// A task that does not exist is reported exactly like one owned by
    /// somebody else, so the gate never reveals which task ids exist.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGateError::Forbidden`] when no matching ownership record
    /// exists, or [`AuthGateError::Store`] when the lookup fails.
    pub async fn require_ownership(
        &self,
        user: &AuthenticatedUser,
        task_id: TaskId,
    ) -> Result<OwnershipGrant, AuthGateError> {
        let owned = self
            .ownership
            .is_owner(user.user_id(), task_id)
            .await
            .inspect_err(|err| {
                error!(
                    user_id = %user.user_id(),
                    task_id = %task_id,
                    error = %err,
                    "ownership lookup failed"
                );
            })?;
        if owned {
            return Ok(OwnershipGrant::new(*user, task_id));
        }
        warn!(user_id = %user.user_id(), task_id = %task_id, "task access denied");
        Err(AuthGateError::Forbidden(task_id))
    }
}
