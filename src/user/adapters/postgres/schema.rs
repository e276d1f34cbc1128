//! Diesel schema for user credential persistence.

diesel::table! {
    /// Registered users and their salted password digests.
    users (id) {
        /// Store-assigned user identifier.
        id -> Uuid,
        /// Unique display name.
        #[max_length = 255]
        name -> Varchar,
        /// `SHA-256(salt || password)` digest.
        password_digest -> Bytea,
    }
}
