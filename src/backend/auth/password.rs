/**
 * Password Hashing
 *
 * bcrypt-backed hashing and verification of user passwords.
 *
 * # Hash Format
 *
 * Hashes are self-describing bcrypt strings (`$2b$<cost>$<salt><digest>`), so
 * verification needs nothing but the stored string. Every call to `hash`
 * draws a fresh random salt: hashing the same password twice gives two
 * different strings, and both verify.
 *
 * # Blocking
 *
 * bcrypt is deliberately slow. Async callers should use `spawn_hash` and
 * `spawn_verify`, which run on Tokio's blocking pool.
 */

use std::sync::{Arc, OnceLock};

use crate::backend::error::CredentialError;

/// Lowest work factor bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Work factor used when none is configured
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

const DECOY_PASSWORD: &str = "formauth-decoy-credential";

/// Salted, adaptive password hasher
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// Hash checked against when the user does not exist
    decoy: Arc<OnceLock<Option<String>>>,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt work factor
    ///
    /// The cost is not range-checked here; an out-of-range cost makes `hash`
    /// fail. `ServerConfig::validate` rejects such values at startup.
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            decoy: Arc::new(OnceLock::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    ///
    /// Empty input is hashed like any other; password policy belongs to callers.
    pub fn hash(&self, plaintext: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(plaintext, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `false` for a malformed stored hash instead of failing.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(plaintext, stored_hash) {
            Ok(matches) => matches,
            Err(_) => {
                tracing::warn!("Stored password hash is malformed, treating as mismatch");
                false
            }
        }
    }

    /// Compute the decoy hash now instead of on the first unknown-user login
    ///
    /// Clones share the decoy, so preparing one prepares all of them. Returns
    /// whether a decoy is available; it is not when the cost is invalid.
    pub fn prepare_decoy(&self) -> bool {
        self.decoy().is_some()
    }

    /// Whether the decoy hash has already been computed
    pub fn is_decoy_prepared(&self) -> bool {
        matches!(self.decoy.get(), Some(Some(_)))
    }

    fn decoy(&self) -> Option<&String> {
        self.decoy
            .get_or_init(|| self.hash(DECOY_PASSWORD).ok())
            .as_ref()
    }

    /// Run a verification whose result is discarded
    ///
    /// Login calls this for unknown usernames so that the response takes as
    /// long as a wrong-password response. Call `prepare_decoy` at startup so
    /// the first such login does not also pay for hashing the decoy.
    pub fn verify_decoy(&self, plaintext: &str) {
        if let Some(decoy) = self.decoy() {
            let _ = bcrypt::verify(plaintext, decoy);
        }
    }

    /// `hash` on the blocking pool
    pub async fn spawn_hash(&self, plaintext: String) -> Result<String, CredentialError> {
        let hasher = self.clone();
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await??;
        Ok(hashed)
    }

    /// `verify` on the blocking pool
    pub async fn spawn_verify(&self, plaintext: String, stored_hash: String) -> bool {
        let hasher = self.clone();
        match tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &stored_hash)).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }

    /// `verify_decoy` on the blocking pool
    pub async fn spawn_verify_decoy(&self, plaintext: String) {
        let hasher = self.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || hasher.verify_decoy(&plaintext)).await {
            tracing::error!("Decoy verification task failed: {}", e);
        }
    }
}
