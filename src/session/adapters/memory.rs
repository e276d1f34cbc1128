//! Server-side session map with revocation.

use crate::session::{
    domain::{SessionClaims, SessionError, SessionResult, SessionToken},
    ports::SessionStore,
};
use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::debug;
use uuid::Uuid;

/// Session store mapping random opaque tokens to claims.
///
/// Expired bindings are swept whenever a new session is issued, so the map
/// holds at most the sessions that are still live plus those that expired
/// since the last login.
pub struct InMemorySessionStore<C = DefaultClock>
where
    C: Clock,
{
    sessions: Arc<RwLock<HashMap<String, SessionClaims>>>,
    clock: Arc<C>,
}

impl InMemorySessionStore<DefaultClock> {
    /// Creates an empty store reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemorySessionStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemorySessionStore<C>
where
    C: Clock,
{
    /// Creates an empty store that sweeps against `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Returns the number of held bindings, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the lock is poisoned.
    pub fn len(&self) -> SessionResult<usize> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.len())
    }

    /// Returns `true` when no bindings are held.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the lock is poisoned.
    pub fn is_empty(&self) -> SessionResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<C> Clone for InMemorySessionStore<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for InMemorySessionStore<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemorySessionStore").finish_non_exhaustive()
    }
}

fn poisoned(err: impl std::fmt::Display) -> SessionError {
    SessionError::store(std::io::Error::other(err.to_string()))
}

fn random_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

#[async_trait]
impl<C> SessionStore for InMemorySessionStore<C>
where
    C: Clock,
{
    async fn issue(&self, claims: &SessionClaims) -> SessionResult<SessionToken> {
        let now = self.clock.utc();
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let before = sessions.len();
        sessions.retain(|_, held| !held.is_expired_at(now));
        let swept = before.saturating_sub(sessions.len());
        if swept > 0 {
            debug!(swept, "expired sessions swept");
        }
        let token = random_token();
        sessions.insert(token.clone(), *claims);
        Ok(SessionToken::new(token))
    }

    async fn resolve(&self, token: &SessionToken) -> SessionResult<Option<SessionClaims>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(token.as_str()).copied())
    }

    async fn revoke(&self, token: &SessionToken) -> SessionResult<()> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.remove(token.as_str());
        Ok(())
    }
}
