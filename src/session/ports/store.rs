//! Session store port.

use crate::session::domain::{SessionClaims, SessionResult, SessionToken};
use async_trait::async_trait;

/// Carrier-agnostic session binding contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Binds `claims` to a fresh opaque token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::session::domain::SessionError`] when the claims cannot
    /// be encoded or stored.
    async fn issue(&self, claims: &SessionClaims) -> SessionResult<SessionToken>;

    /// Returns the claims bound to `token`.
    ///
    /// Malformed, tampered, or revoked tokens yield `None`. Expiry is
    /// checked by the caller.
    async fn resolve(&self, token: &SessionToken) -> SessionResult<Option<SessionClaims>>;

    /// Invalidates `token` where the store can do so.
    async fn revoke(&self, token: &SessionToken) -> SessionResult<()>;
}
