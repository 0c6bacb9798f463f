//! Authentication Module
//!
//! Credential storage and verification, sessions, and the HTTP handlers
//! built on them.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt `PasswordHasher`
//! - **`users`** - `UserRecord` and `UserRecordDraft`
//! - **`store`** - `UserStore` trait, in-memory and PostgreSQL implementations
//! - **`service`** - `CredentialService`: register and lookup
//! - **`principal`** - `AuthenticatedPrincipal`, the adapter from a record to
//!   what the authentication boundary needs
//! - **`sessions`** - Session tokens and cookies
//! - **`handlers`** - HTTP handlers
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hashing
//! ├── users.rs        - User model
//! ├── store/          - User storage
//! ├── service.rs      - Credential service
//! ├── principal.rs    - Authenticated principal
//! ├── sessions.rs     - Session tokens and cookies
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: `CredentialService::register` → `PasswordHasher::hash` → `UserStore::insert`
//! 2. **Login**: `CredentialService::lookup` → `PasswordHasher::verify` → session cookie
//! 3. **Later requests**: session cookie → `SessionManager::verify` → principal
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (salted, tunable cost) before storage
//! - Neither passwords nor hashes appear in responses or logs
//! - Unknown usernames and wrong passwords fail identically

/// Password hashing
pub mod password;

/// User data model
pub mod users;

/// User storage
pub mod store;

/// Registration and lookup
pub mod service;

/// Authenticated principal
pub mod principal;

/// Session tokens and cookies
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use password::PasswordHasher;
pub use principal::AuthenticatedPrincipal;
pub use service::CredentialService;
pub use sessions::SessionManager;
pub use store::{InMemoryUserStore, PgUserStore, UserStore};
pub use users::{UserRecord, UserRecordDraft};
