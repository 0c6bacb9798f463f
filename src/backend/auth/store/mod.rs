//! User Storage
//!
//! The `UserStore` trait and its implementations.
//!
//! # Implementations
//!
//! - **`memory`** - `InMemoryUserStore`, a map behind a Tokio lock. Used by
//!   tests and when no database is configured.
//! - **`postgres`** - `PgUserStore`, backed by the `user_auth` table.
//!
//! # Uniqueness
//!
//! `insert` fails with `CredentialError::DuplicateUsername` when the username
//! is taken. The check happens inside the store (a single write lock for the
//! in-memory map, a `UNIQUE` constraint for PostgreSQL), never as a separate
//! read followed by a write, so concurrent registrations of one username give
//! exactly one success.

use async_trait::async_trait;

use crate::backend::auth::users::{UserRecord, UserRecordDraft};
use crate::backend::error::CredentialError;

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// Persistence of user records keyed by unique username
///
/// There is no update or delete: records are only ever created.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact username
    ///
    /// Returns `Ok(None)` when no record matches.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, CredentialError>;

    /// Persist a new user and assign its id
    async fn insert(&self, draft: UserRecordDraft) -> Result<UserRecord, CredentialError>;
}
