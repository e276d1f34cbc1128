//! Application services for user credentials.

mod credentials;

pub use credentials::{
    ChangePasswordRequest, CredentialError, CredentialResult, CredentialService,
    RegisterUserRequest,
};
