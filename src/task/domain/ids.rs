//! Identifier type for tasks.
//!
//! Task ids reach the tracker from untrusted routes, so they parse
//! leniently; whether the caller may use one is decided by the ownership
//! gate, never by the id itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, store-assigned identifier of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Allocates an identifier for a task the in-memory store is about to
    /// insert. `PostgreSQL` assigns its own.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Rehydrates an identifier returned by `INSERT .. RETURNING` or read from
    /// the `tasks` and `ownerships` tables.
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

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a path segment such as `/tasks/{id}`, ignoring surrounding
/// whitespace.
impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}
