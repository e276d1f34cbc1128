//! Service layer for registration, credential verification, and password
//! changes.

use crate::error::ErrorKind;
use crate::user::{
    domain::{
        DIGEST_LENGTH, NewPassword, PasswordDigest, PasswordHasher, User, UserDomainError, UserId,
        Username,
    },
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Digest compared against when the username is unknown, so that both
/// rejection paths hash and compare exactly once.
const UNKNOWN_USER_DIGEST: PasswordDigest = PasswordDigest::new([0; DIGEST_LENGTH]);

/// Request payload for registering a new user.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    password: String,
    password_confirmation: String,
}

impl RegisterUserRequest {
    /// Creates a registration request from raw form values.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }
}

impl std::fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Request payload for replacing a user's password.
#[derive(Clone, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    username: String,
    old_password: String,
    new_password: String,
}

impl ChangePasswordRequest {
    /// Creates a password change request from raw form values.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }
}

impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Service-level errors for credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Input validation failed.
    #[error(transparent)]
    InvalidInput(#[from] UserDomainError),

    /// The username is already registered.
    #[error("username is already taken: {0}")]
    DuplicateUser(Username),

    /// The username/password pair was rejected.
    #[error("username or password is incorrect")]
    AuthenticationFailed,

    /// The credential store failed.
    #[error("credential store failure")]
    Store(#[source] UserRepositoryError),
}

impl CredentialError {
    /// Classifies the error for the caller-facing surface.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::DuplicateUser(_) => ErrorKind::DuplicateUser,
            Self::AuthenticationFailed => ErrorKind::AuthenticationFailure,
            Self::Store(_) => ErrorKind::StoreError,
        }
    }
}

impl From<UserRepositoryError> for CredentialError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateUsername(name) => Self::DuplicateUser(name),
            other => {
                error!(error = %other, "credential store failure");
                Self::Store(other)
            }
        }
    }
}

/// Result type for credential service operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Credential store: owns user records and password verification.
#[derive(Clone)]
pub struct CredentialService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R> CredentialService<R>
where
    R: UserRepository,
{
    /// Creates a new credential service.
    #[must_use]
    pub const fn new(repository: Arc<R>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }

    /// Derives the stored digest for a plaintext password.
    #[must_use]
    pub fn hash(&self, password: &str) -> PasswordDigest {
        self.hasher.hash(password)
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InvalidInput`] for an empty username, an
    /// empty or short password, or a confirmation mismatch;
    /// [`CredentialError::DuplicateUser`] when the name is taken; or
    /// [`CredentialError::Store`] when persistence fails.
    pub async fn register(&self, request: RegisterUserRequest) -> CredentialResult<User> {
        let RegisterUserRequest {
            username,
            password,
            password_confirmation,
        } = request;

        let name = Username::new(username)?;
        let new_password = NewPassword::confirmed(password, &password_confirmation)?;
        let digest = self.hasher.hash(new_password.expose());

        let user = self.repository.insert(&name, &digest).await?;
        info!(user_id = %user.id(), username = %user.name(), "user registered");
        Ok(user)
    }

    /// Verifies a username/password pair and returns the stored user.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::AuthenticationFailed`] when verification
    /// fails or [`CredentialError::Store`] when the lookup fails.
    pub async fn verify(&self, username: &str, password: &str) -> CredentialResult<User> {
        let user = match Username::new(username) {
            Ok(name) => self.repository.find_by_name(&name).await?,
            Err(_) => None,
        };

        let stored_digest = user
            .as_ref()
            .map_or(UNKNOWN_USER_DIGEST, |found| *found.password_digest());
        let digest_matches = self.hasher.verify(password, &stored_digest);

        match user {
            Some(found) if digest_matches => Ok(found),
            _ => {
                warn!("credential verification rejected");
                Err(CredentialError::AuthenticationFailed)
            }
        }
    }

    /// Replaces a user's password after verifying the old one.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InvalidInput`] when the new password is
    /// empty or too short, [`CredentialError::AuthenticationFailed`] when the
    /// old password does not verify, or [`CredentialError::Store`] when
    /// persistence fails.
    pub async fn change_password(&self, request: ChangePasswordRequest) -> CredentialResult<()> {
        let ChangePasswordRequest {
            username,
            old_password,
            new_password,
        } = request;

        let replacement = NewPassword::new(new_password)?;
        let user = self.verify(&username, &old_password).await?;
        let digest = self.hasher.hash(replacement.expose());

        self.repository
            .update_password_digest(user.id(), &digest)
            .await?;
        info!(user_id = %user.id(), "password changed");
        Ok(())
    }

    /// Looks up a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Store`] when the lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> CredentialResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
