/**
 * Credential Errors
 *
 * Errors raised by the credential core: the user store, the password hasher,
 * and the credential service.
 *
 * # Error Categories
 *
 * - `EmptyUsername` - Registration rejected before any work is done
 * - `DuplicateUsername` - The store already holds a record with this username
 * - `UserNotFound` - Lookup found no record; the login boundary must not
 *   reveal this to the caller
 * - `Hashing`, `Database`, `TaskJoin` - Infrastructure failures, surfaced as
 *   internal errors
 *
 * None of these errors carry a password or a password hash.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// Registration attempted with an empty username
    #[error("username must not be empty")]
    EmptyUsername,

    /// A record with this username already exists
    #[error("username '{0}' is already registered")]
    DuplicateUsername(String),

    /// No record matches the requested username
    #[error("username '{0}' not found")]
    UserNotFound(String),

    /// bcrypt failed to produce a hash
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// The backing database failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A blocking hashing task panicked or was cancelled
    #[error("background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl CredentialError {
    /// True for failures caused by the caller's input rather than infrastructure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyUsername | Self::DuplicateUsername(_) | Self::UserNotFound(_)
        )
    }
}
