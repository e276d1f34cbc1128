//! User registration and credential verification.
//!
//! This module is the credential store: it owns user records, derives salted
//! password digests, and verifies login attempts without revealing whether a
//! username exists. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
