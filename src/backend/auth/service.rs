/**
 * Credential Service
 *
 * Registration and user lookup on top of a `UserStore` and a
 * `PasswordHasher`.
 *
 * # Registration
 *
 * 1. Reject an empty username
 * 2. Hash the password on the blocking pool
 * 3. Insert; a taken username fails with `DuplicateUsername` and nothing is
 *    written
 *
 * Registration is not idempotent: registering an existing username is always
 * an error, never an overwrite.
 *
 * # Lookup
 *
 * `lookup` is the single call the login boundary makes per attempt. It
 * returns the stored record (hash included) or `UserNotFound`.
 *
 * The service keeps no cache; every call goes to the store.
 */

use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::store::UserStore;
use crate::backend::auth::users::{UserRecord, UserRecordDraft};
use crate::backend::error::CredentialError;

#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl CredentialService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// The hasher used for registration, shared with the login boundary
    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `EmptyUsername` - `username` is empty
    /// * `DuplicateUsername` - a user with this name exists
    /// * `Hashing`, `Database`, `TaskJoin` - infrastructure failures
    pub async fn register(
        &self,
        username: &str,
        plaintext_password: &str,
        role: &str,
    ) -> Result<UserRecord, CredentialError> {
        if username.is_empty() {
            return Err(CredentialError::EmptyUsername);
        }

        let password_hash = self.hasher.spawn_hash(plaintext_password.to_string()).await?;
        let draft = UserRecordDraft::new(username, password_hash, role);

        let user = self.store.insert(draft).await?;
        tracing::info!("Registered user {} (id {})", user.username, user.id);

        Ok(user)
    }

    /// Fetch the record the login boundary verifies against
    ///
    /// # Errors
    ///
    /// * `UserNotFound` - no user has this username
    /// * `Database` - the store failed
    pub async fn lookup(&self, username: &str) -> Result<UserRecord, CredentialError> {
        self.store
            .find_by_username(username)
            .await?
            .ok_or_else(|| CredentialError::UserNotFound(username.to_string()))
    }
}
