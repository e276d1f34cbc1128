//! Authentication and ownership checks in front of task operations.
//!
//! The gate hands out proof values: [`AuthenticatedUser`] once a session has
//! been resolved to a user, and [`OwnershipGrant`] once that user has been
//! shown to own a specific task. Neither can be built outside this crate, so
//! task operations that demand them cannot run before the checks do, and the
//! ownership check cannot run before authentication.

mod gate;
mod proof;

pub use gate::{AuthGate, AuthGateError, AuthState, require_authenticated};
pub use proof::{AuthenticatedUser, OwnershipGrant};
