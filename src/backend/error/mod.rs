//! Backend Error Module
//!
//! Error types for the backend and their conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── credential.rs - Errors from the credential core
//! ├── types.rs      - BackendError, returned by handlers
//! └── conversion.rs - IntoResponse for BackendError
//! ```
//!
//! # Error Types
//!
//! - `CredentialError` - Store, hasher and credential service failures
//! - `BackendError` - Everything a handler can return
//!
//! Handlers return `Result<_, BackendError>`; the `?` operator lifts a
//! `CredentialError` or `SessionError` into it.

/// Credential core errors
pub mod credential;

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use credential::CredentialError;
pub use types::BackendError;
