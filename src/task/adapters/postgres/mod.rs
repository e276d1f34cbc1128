//! `PostgreSQL` adapters for task and ownership persistence.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool};
