//! Request-scoped session view and carrier directives.

use super::SessionToken;
use crate::user::domain::UserId;

/// Which user, if any, the current request is authenticated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    user_id: Option<UserId>,
}

impl Session {
    /// A session with no user.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// A session bound to `user_id`.
    #[must_use]
    pub const fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Returns the bound user, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }
}

/// Instruction for the session carrier (for example a cookie jar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDirective {
    /// Store `token` on the client for `max_age_secs` seconds.
    Issue {
        /// Token to hand to the client.
        token: SessionToken,
        /// Lifetime in seconds.
        max_age_secs: i64,
    },
    /// Discard the client's token immediately.
    Clear,
}

impl SessionDirective {
    /// Returns the carrier max-age; `-1` asks the client to drop the token
    /// at once.
    #[must_use]
    pub const fn max_age_secs(&self) -> i64 {
        match self {
            Self::Issue { max_age_secs, .. } => *max_age_secs,
            Self::Clear => -1,
        }
    }

    /// Returns the token to set, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        match self {
            Self::Issue { token, .. } => Some(token),
            Self::Clear => None,
        }
    }
}
