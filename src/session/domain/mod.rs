//! Domain model for sessions.

mod claims;
mod error;
mod session;

pub use claims::{SessionClaims, SessionToken};
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionDirective};
