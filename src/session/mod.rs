//! Session issuance, resolution, and teardown.
//!
//! A session binds an opaque client-held token to a user identifier and an
//! expiry instant. The [`ports::SessionStore`] port decides how the binding
//! is carried: [`adapters::SignedCookieStore`] keeps it entirely in the token,
//! while [`adapters::InMemorySessionStore`] keeps it server-side so logout can
//! revoke it. The module follows hexagonal architecture:
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
