//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username exceeds the 255-character storage limit.
    #[error("username exceeds {max} character limit")]
    UsernameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password is shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// The password and its confirmation differ.
    #[error("password and password confirmation do not match")]
    PasswordConfirmationMismatch,

    /// A persisted digest does not have the expected length.
    #[error("password digest must be {expected} bytes, found {found}")]
    InvalidDigestLength {
        /// Expected digest length in bytes.
        expected: usize,
        /// Length of the rejected value.
        found: usize,
    },
}
