//! Taskgate: a multi-user task tracker backend.
//!
//! Users register with a name and password, log in to obtain a session, and
//! manage tasks that only they can see or change. Every task operation passes
//! an authentication gate and, for task-scoped operations, an ownership gate
//! before any data is touched.
//!
//! # Architecture
//!
//! Taskgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`user`]: Registration, password digests, and credential checks
//! - [`session`]: Session issuance, lookup, and logout
//! - [`auth`]: Authentication and ownership gates
//! - [`task`]: Tasks and the ownership relation
//! - [`tracker`]: The caller-facing façade tying them together
//! - [`config`]: Environment-driven configuration
//! - [`error`]: The shared error classification

pub mod auth;
pub mod config;
pub mod error;
pub mod session;
pub mod task;
pub mod tracker;
pub mod user;
