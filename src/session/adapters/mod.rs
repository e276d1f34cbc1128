//! Adapter implementations of the session store port.

mod memory;
mod signed_cookie;

pub use memory::InMemorySessionStore;
pub use signed_cookie::{MIN_SECRET_LENGTH, SignedCookieStore};
