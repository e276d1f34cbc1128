//! Cross-module error taxonomy.
//!
//! Each module keeps its own `thiserror` enums. [`ErrorKind`] is the coarse
//! classification every service error maps onto, so that a routing layer can
//! translate failures into protocol responses without matching on module
//! internals.

use std::fmt;

/// Coarse failure classification shared by all caller-facing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, missing, or too-short input. The caller may correct and
    /// resubmit.
    InvalidInput,
    /// Registration collided with an existing username.
    DuplicateUser,
    /// Login or credential verification failed, or no session is present.
    AuthenticationFailure,
    /// The caller does not own the requested task (or the task does not
    /// exist; the two are not distinguished).
    AuthorizationFailure,
    /// The task vanished for an otherwise authorized caller.
    NotFound,
    /// Connection, query, or transaction failure.
    StoreError,
}

impl ErrorKind {
    /// Returns a stable snake-case label for logs and protocol mapping.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::DuplicateUser => "duplicate_user",
            Self::AuthenticationFailure => "authentication_failure",
            Self::AuthorizationFailure => "authorization_failure",
            Self::NotFound => "not_found",
            Self::StoreError => "store_error",
        }
    }

    /// Returns `true` when the caller can fix the failure by resubmitting
    /// different input.
    #[must_use]
    pub const fn is_caller_correctable(self) -> bool {
        matches!(self, Self::InvalidInput | Self::DuplicateUser)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
