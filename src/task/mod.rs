//! Task storage and the ownership relation.
//!
//! Every task is created together with an ownership record naming its
//! creator, and every task-scoped service operation takes an
//! [`crate::auth::OwnershipGrant`] proving that relation was checked. The
//! module follows hexagonal architecture:
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
