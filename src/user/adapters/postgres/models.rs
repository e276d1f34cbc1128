//! Diesel row models for user persistence.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned user identifier.
    pub id: uuid::Uuid,
    /// Unique display name.
    pub name: String,
    /// Raw digest bytes.
    pub password_digest: Vec<u8>,
}

/// Insert model for user records. The identifier is assigned by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Unique display name.
    pub name: String,
    /// Raw digest bytes.
    pub password_digest: Vec<u8>,
}
