//! Caller-facing façade over credentials, sessions, the auth gate, and tasks.
//!
//! [`TaskTracker`] sequences every task operation as authenticate, then
//! authorize, then touch data. A routing layer only needs to map request
//! fields in and [`TrackerError::kind`] out.

use crate::auth::{AuthGate, AuthGateError, AuthenticatedUser, require_authenticated};
use crate::error::ErrorKind;
use crate::session::{
    domain::{SessionDirective, SessionError, SessionToken},
    ports::SessionStore,
    services::SessionManager,
};
use crate::task::{
    domain::{ListingScope, Task, TaskId},
    ports::{TaskOwnershipStore, TaskRepository},
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskRequest},
};
use crate::user::{
    domain::{DEFAULT_PASSWORD_SALT, PasswordHasher, User},
    ports::UserRepository,
    services::{ChangePasswordRequest, CredentialError, CredentialService, RegisterUserRequest},
};
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Tunables shared by the tracker's components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    /// Salt prepended to passwords before hashing.
    pub password_salt: String,
    /// Session lifetime.
    pub session_ttl: TimeDelta,
    /// Which tasks listings return.
    pub listing_scope: ListingScope,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            password_salt: DEFAULT_PASSWORD_SALT.to_owned(),
            session_ttl: TimeDelta::days(1),
            listing_scope: ListingScope::Owned,
        }
    }
}

/// Any failure surfaced by [`TaskTracker`].
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Registration, login, or password change failed.
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    /// The session store failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The request was not authenticated or not authorized.
    #[error(transparent)]
    Gate(#[from] AuthGateError),

    /// A task operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskServiceError),
}

impl TrackerError {
    /// Returns the caller-facing classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Credentials(err) => err.kind(),
            Self::Session(err) => err.kind(),
            Self::Gate(err) => err.kind(),
            Self::Tasks(err) => err.kind(),
        }
    }
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Multi-user task tracker.
pub struct TaskTracker<U, S, T, C>
where
    U: UserRepository,
    S: SessionStore,
    T: TaskRepository + TaskOwnershipStore,
    C: Clock + Send + Sync,
{
    credentials: CredentialService<U>,
    sessions: SessionManager<S, C>,
    gate: AuthGate<T>,
    tasks: TaskService<T, C>,
}

impl<U, S, T, C> TaskTracker<U, S, T, C>
where
    U: UserRepository,
    S: SessionStore,
    T: TaskRepository + TaskOwnershipStore,
    C: Clock + Send + Sync,
{
    /// Wires the tracker over the given stores.
    #[must_use]
    pub fn new(
        users: Arc<U>,
        sessions: Arc<S>,
        tasks: Arc<T>,
        clock: Arc<C>,
        settings: &TrackerSettings,
    ) -> Self {
        let hasher = PasswordHasher::new(settings.password_salt.as_bytes());
        Self {
            credentials: CredentialService::new(users, hasher),
            sessions: SessionManager::new(sessions, Arc::clone(&clock), settings.session_ttl),
            gate: AuthGate::new(Arc::clone(&tasks)),
            tasks: TaskService::with_scope(tasks, clock, settings.listing_scope),
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidInput`] or [`ErrorKind::DuplicateUser`]
    /// as described on [`CredentialService::register`].
    pub async fn register(&self, request: RegisterUserRequest) -> TrackerResult<User> {
        Ok(self.credentials.register(request).await?)
    }

    /// Verifies credentials and issues a session.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::AuthenticationFailure`] for an unknown user or
    /// a wrong password, without saying which.
    pub async fn login(&self, username: &str, password: &str) -> TrackerResult<SessionDirective> {
        let user = self.credentials.verify(username, password).await?;
        Ok(self.sessions.login(&user).await?)
    }

    /// Ends the session carried by `token`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StoreError`] when revocation fails.
    pub async fn logout(&self, token: Option<&SessionToken>) -> TrackerResult<SessionDirective> {
        Ok(self.sessions.logout(token).await?)
    }

    /// Replaces a user's password after verifying the old one.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidInput`] for a weak new password or
    /// [`ErrorKind::AuthenticationFailure`] for a wrong old password.
    pub async fn change_password(&self, request: ChangePasswordRequest) -> TrackerResult<()> {
        Ok(self.credentials.change_password(request).await?)
    }

    /// Returns the user bound to `token`, if any.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StoreError`] only when a store fails.
    pub async fn current_user(&self, token: Option<&SessionToken>) -> TrackerResult<Option<User>> {
        let Some(user_id) = self.sessions.current_user(token).await? else {
            return Ok(None);
        };
        Ok(self.credentials.find_by_id(user_id).await?)
    }

    /// Lists the caller's tasks, optionally filtered by keyword.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::AuthenticationFailure`] without a session.
    pub async fn list_tasks(
        &self,
        token: Option<&SessionToken>,
        keyword: Option<&str>,
    ) -> TrackerResult<Vec<Task>> {
        let user = self.authenticate(token).await?;
        Ok(self.tasks.list(&user, keyword).await?)
    }

    /// Creates a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::AuthenticationFailure`] without a session or
    /// [`ErrorKind::InvalidInput`] for a blank title.
    pub async fn create_task(
        &self,
        token: Option<&SessionToken>,
        request: CreateTaskRequest,
    ) -> TrackerResult<Task> {
        let user = self.authenticate(token).await?;
        Ok(self.tasks.create(&user, request).await?)
    }

    /// Loads one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::AuthenticationFailure`] without a session and
    /// [`ErrorKind::AuthorizationFailure`] when the caller does not own the
    /// task or it does not exist.
    pub async fn get_task(
        &self,
        token: Option<&SessionToken>,
        task_id: TaskId,
    ) -> TrackerResult<Task> {
        let user = self.authenticate(token).await?;
        let grant = self.gate.require_ownership(&user, task_id).await?;
        Ok(self.tasks.get(&grant).await?)
    }

    /// Replaces one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// As [`Self::get_task`], plus [`ErrorKind::InvalidInput`] for a blank
    /// title.
    pub async fn update_task(
        &self,
        token: Option<&SessionToken>,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> TrackerResult<()> {
        let user = self.authenticate(token).await?;
        let grant = self.gate.require_ownership(&user, task_id).await?;
        Ok(self.tasks.update(&grant, request).await?)
    }

    /// Deletes one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// As [`Self::get_task`].
    pub async fn delete_task(
        &self,
        token: Option<&SessionToken>,
        task_id: TaskId,
    ) -> TrackerResult<()> {
        let user = self.authenticate(token).await?;
        let grant = self.gate.require_ownership(&user, task_id).await?;
        Ok(self.tasks.delete(grant).await?)
    }

    async fn authenticate(&self, token: Option<&SessionToken>) -> TrackerResult<AuthenticatedUser> {
        let session = self.sessions.session(token).await?;
        Ok(require_authenticated(&session)?)
    }
}
