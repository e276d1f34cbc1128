//! In-memory task adapters.

mod store;

pub use store::InMemoryTaskStore;
