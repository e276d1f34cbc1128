//! Password validation and salted digest derivation.
//!
//! Passwords are never stored. The only persisted form is
//! `SHA-256(salt || password)`, where the salt is a single system-wide value.
//! Digest comparison runs in constant time.

use super::UserDomainError;
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Salt used when configuration does not override it.
pub const DEFAULT_PASSWORD_SALT: &str = "taskgate#";

/// Length of a password digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// A plaintext password that passed the registration strength rules.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(String);

impl NewPassword {
    /// Validates a new password.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyPassword`] for an empty value or
    /// [`UserDomainError::PasswordTooShort`] when it has fewer than
    /// [`MIN_PASSWORD_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(UserDomainError::EmptyPassword);
        }
        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserDomainError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Validates a new password against its confirmation entry.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`NewPassword::new`], or
    /// [`UserDomainError::PasswordConfirmationMismatch`] when the two values
    /// differ.
    pub fn confirmed(
        value: impl Into<String>,
        confirmation: &str,
    ) -> Result<Self, UserDomainError> {
        let password = Self::new(value)?;
        if password.0 != confirmation {
            return Err(UserDomainError::PasswordConfirmationMismatch);
        }
        Ok(password)
    }

    /// Returns the plaintext for hashing.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewPassword(<redacted>)")
    }
}

/// Fixed-length salted password digest.
#[derive(Clone, Copy, Eq)]
pub struct PasswordDigest([u8; DIGEST_LENGTH]);

impl PasswordDigest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Reconstructs a digest from persisted bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidDigestLength`] when the slice is not
    /// exactly [`DIGEST_LENGTH`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, UserDomainError> {
        <[u8; DIGEST_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| UserDomainError::InvalidDigestLength {
                expected: DIGEST_LENGTH,
                found: bytes.len(),
            })
    }

    /// Returns the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Compares two digests without data-dependent early exit.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl PartialEq for PasswordDigest {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

/// Derives password digests from a fixed salt.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHasher {
    salt: Vec<u8>,
}

impl PasswordHasher {
    /// Creates a hasher using the given system-wide salt.
    #[must_use]
    pub fn new(salt: impl Into<Vec<u8>>) -> Self {
        Self { salt: salt.into() }
    }

    /// Computes `SHA-256(salt || password)`.
    ///
    /// The result is deterministic for a given salt and password.
    #[must_use]
    pub fn hash(&self, password: &str) -> PasswordDigest {
        let mut hasher = Sha256::new();
        hasher.update(&self.salt);
        hasher.update(password.as_bytes());
        PasswordDigest(hasher.finalize().into())
    }

    /// Returns `true` when `password` hashes to `digest`.
    #[must_use]
    pub fn verify(&self, password: &str, digest: &PasswordDigest) -> bool {
        self.hash(password).matches(digest)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_SALT)
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}
