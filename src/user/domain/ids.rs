//! Identifier type for registered users.
//!
//! A [`UserId`] is what sessions carry and what ownership records point at;
//! usernames are only consulted at login.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, store-assigned identifier of a registered user.
///
/// Serialized as the bare UUID so it can sit in session claims unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Allocates an identifier for a user the in-memory repository is about
    /// to insert. `PostgreSQL` assigns its own.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Rehydrates an identifier read back from the `users` or `ownerships`
    /// table.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the UUID bound into diesel queries.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
