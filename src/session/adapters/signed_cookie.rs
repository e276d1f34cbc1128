//! Stateless sessions carried in an HMAC-signed token.
//!
//! Token layout: `base64url(json(claims)) "." hex(HMAC-SHA256(secret, payload))`.

use crate::session::{
    domain::{SessionClaims, SessionError, SessionResult, SessionToken},
    ports::SessionStore,
};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Minimum accepted signing secret length in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Session store that keeps all state in the signed token.
///
/// Revocation is a no-op: logging out relies on the client discarding the
/// token, and a copied token stays valid until it expires.
#[derive(Clone)]
pub struct SignedCookieStore {
    mac: HmacSha256,
}

impl SignedCookieStore {
    /// Creates a store signing with `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidSecret`] when `secret` is shorter than
    /// [`MIN_SECRET_LENGTH`].
    pub fn new(secret: &[u8]) -> SessionResult<Self> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(SessionError::InvalidSecret {
                min: MIN_SECRET_LENGTH,
            });
        }
        let mac = HmacSha256::new_from_slice(secret).map_err(|_| SessionError::InvalidSecret {
            min: MIN_SECRET_LENGTH,
        })?;
        Ok(Self { mac })
    }

    fn signature(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn verified_payload<'a>(&self, token: &'a str) -> Option<&'a str> {
        let (payload, signature) = token.split_once('.')?;
        let expected = hex::decode(signature).ok()?;
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        mac.verify_slice(&expected).ok()?;
        Some(payload)
    }
}

impl fmt::Debug for SignedCookieStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedCookieStore")
            .field("mac", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl SessionStore for SignedCookieStore {
    async fn issue(&self, claims: &SessionClaims) -> SessionResult<SessionToken> {
        let json = serde_json::to_vec(claims).map_err(SessionError::encoding)?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = self.signature(&payload);
        Ok(SessionToken::new(format!("{payload}.{signature}")))
    }

    async fn resolve(&self, token: &SessionToken) -> SessionResult<Option<SessionClaims>> {
        let claims = self
            .verified_payload(token.as_str())
            .and_then(|payload| URL_SAFE_NO_PAD.decode(payload).ok())
            .and_then(|json| serde_json::from_slice::<SessionClaims>(&json).ok());
        Ok(claims)
    }

    async fn revoke(&self, _token: &SessionToken) -> SessionResult<()> {
        Ok(())
    }
}
