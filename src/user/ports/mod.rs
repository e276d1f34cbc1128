//! Port contracts for user credential storage.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use repository::MockUserRepository;
