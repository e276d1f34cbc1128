//! Domain model for user credentials.
//!
//! Usernames, password strength rules, and salted digests live here. Nothing
//! in this module touches storage.

mod error;
mod ids;
mod name;
mod password;
mod user;

pub use error::UserDomainError;
pub use ids::UserId;
pub use name::Username;
pub use password::{
    DEFAULT_PASSWORD_SALT, DIGEST_LENGTH, MIN_PASSWORD_LENGTH, NewPassword, PasswordDigest,
    PasswordHasher,
};
pub use user::User;
