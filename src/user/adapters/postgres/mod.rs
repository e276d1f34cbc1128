//! `PostgreSQL` adapters for user credential persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresUserRepository, UserPgPool};
