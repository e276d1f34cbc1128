//! Registered user record.

use super::{PasswordDigest, UserId, Username};

/// A registered user as stored by the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: Username,
    password_digest: PasswordDigest,
}

impl User {
    /// Reconstructs a user from stored fields.
    #[must_use]
    pub const fn new(id: UserId, name: Username, password_digest: PasswordDigest) -> Self {
        Self {
            id,
            name,
            password_digest,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the unique username.
    #[must_use]
    pub const fn name(&self) -> &Username {
        &self.name
    }

    /// Returns the stored password digest.
    #[must_use]
    pub const fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }
}
