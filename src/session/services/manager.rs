//! Login, session lookup, and logout.

use crate::session::{
    domain::{Session, SessionClaims, SessionDirective, SessionError, SessionResult, SessionToken},
    ports::SessionStore,
};
use crate::user::domain::{User, UserId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error, info};

fn log_store_failure(err: &SessionError) {
    error!(error = %err, "session store operation failed");
}

/// Issues and resolves sessions through a [`SessionStore`].
#[derive(Debug)]
pub struct SessionManager<S, C>
where
    S: SessionStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    ttl: TimeDelta,
}

impl<S, C> Clone for SessionManager<S, C>
where
    S: SessionStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            ttl: self.ttl,
        }
    }
}

impl<S, C> SessionManager<S, C>
where
    S: SessionStore,
    C: Clock + Send + Sync,
{
    /// Creates a manager issuing sessions that live for `ttl`.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, ttl: TimeDelta) -> Self {
        Self { store, clock, ttl }
    }

    /// Returns the configured session lifetime.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Binds a new session to `user`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::session::domain::SessionError`] when the store cannot
    /// issue a token.
    pub async fn login(&self, user: &User) -> SessionResult<SessionDirective> {
        let expires_at = self
            .clock
            .utc()
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let token = self
            .store
            .issue(&SessionClaims::new(user.id(), expires_at))
            .await
            .inspect_err(log_store_failure)?;
        info!(user_id = %user.id(), "session issued");
        Ok(SessionDirective::Issue {
            token,
            max_age_secs: self.ttl.num_seconds(),
        })
    }

    /// Resolves the request's token into a [`Session`].
    ///
    /// Missing, malformed, tampered, revoked, and expired tokens all yield an
    /// anonymous session. Expired bindings are revoked on sight.
    ///
    /// # Errors
    ///
    /// Returns [`crate::session::domain::SessionError`] only when the backing
    /// store fails.
    pub async fn session(&self, token: Option<&SessionToken>) -> SessionResult<Session> {
        let Some(presented) = token else {
            return Ok(Session::anonymous());
        };
        let resolved = self
            .store
            .resolve(presented)
            .await
            .inspect_err(log_store_failure)?;
        match resolved {
            Some(claims) if !claims.is_expired_at(self.clock.utc()) => {
                Ok(Session::authenticated(claims.user_id()))
            }
            Some(claims) => {
                debug!(user_id = %claims.user_id(), "expired session presented");
                self.store
                    .revoke(presented)
                    .await
                    .inspect_err(log_store_failure)?;
                Ok(Session::anonymous())
            }
            None => Ok(Session::anonymous()),
        }
    }

    /// Returns the user bound to `token`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`crate::session::domain::SessionError`] only when the backing
    /// store fails.
    pub async fn current_user(
        &self,
        token: Option<&SessionToken>,
    ) -> SessionResult<Option<UserId>> {
        Ok(self.session(token).await?.user_id())
    }

    /// Revokes `token` and tells the carrier to discard it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::session::domain::SessionError`] when revocation fails.
    pub async fn logout(&self, token: Option<&SessionToken>) -> SessionResult<SessionDirective> {
        if let Some(presented) = token {
            self.store
                .revoke(presented)
                .await
                .inspect_err(log_store_failure)?;
        }
        info!("session cleared");
        Ok(SessionDirective::Clear)
    }
}
