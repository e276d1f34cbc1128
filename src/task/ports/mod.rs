//! Port contracts for task storage and ownership.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod ownership;
pub mod repository;

pub use ownership::TaskOwnershipStore;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use ownership::MockTaskOwnershipStore;
#[cfg(test)]
pub use repository::MockTaskRepository;
