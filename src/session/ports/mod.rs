//! Port contracts for session storage.

pub mod store;

pub use store::SessionStore;

#[cfg(test)]
pub use store::MockSessionStore;
