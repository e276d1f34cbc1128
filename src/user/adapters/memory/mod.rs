//! In-memory user adapters.

mod repository;

pub use repository::InMemoryUserRepository;
