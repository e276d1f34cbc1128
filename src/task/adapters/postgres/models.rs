//! Diesel row models for task persistence.

use super::schema::{ownerships, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: uuid::Uuid,
    /// Title text.
    pub title: String,
    /// Description text, empty when absent.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records. The identifier is assigned by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Title text.
    pub title: String,
    /// Description text, empty when absent.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset replacing the editable task columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Title text.
    pub title: String,
    /// Description text, empty when absent.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
}

/// Insert model for ownership records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = ownerships)]
pub struct NewOwnershipRow {
    /// Owned task.
    pub task_id: uuid::Uuid,
    /// Owning user.
    pub user_id: uuid::Uuid,
}
