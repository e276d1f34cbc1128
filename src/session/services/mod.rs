//! Session orchestration services.

mod manager;

pub use manager::SessionManager;
