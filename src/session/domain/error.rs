//! Session error type.

use crate::error::ErrorKind;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors returned while issuing, resolving, or revoking sessions.
///
/// A token that fails to decode is not an error; it resolves to no session.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The signing secret is shorter than required.
    #[error("session secret must be at least {min} bytes")]
    InvalidSecret {
        /// Minimum accepted secret length.
        min: usize,
    },

    /// Claims could not be encoded into a token.
    #[error("session encoding error: {0}")]
    Encoding(Arc<dyn std::error::Error + Send + Sync>),

    /// The backing session store failed.
    #[error("session store error: {0}")]
    Store(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    /// Wraps an encoding error.
    pub fn encoding(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Encoding(Arc::new(err))
    }

    /// Wraps a store error.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Arc::new(err))
    }

    /// Returns the caller-facing classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::StoreError
    }
}
