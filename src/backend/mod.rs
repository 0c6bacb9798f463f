//! Backend Module
//!
//! This module contains all server-side code for formauth: the Axum HTTP
//! server, credential storage and verification, and the authentication
//! boundary that gates requests.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, user storage, credential service, sessions
//! - **`middleware`** - Access policy table and authentication boundary
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Credentials and sessions
//! ├── middleware/     - Request gating
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Every request passes through the authentication boundary. It resolves the
//! session cookie (if any) into an `AuthenticatedPrincipal`, then consults
//! the `AccessPolicy` for the request path. Public paths always proceed;
//! protected paths proceed only with a principal and are otherwise redirected
//! to `/login`.
//!
//! # State
//!
//! The shared `AppState` holds the credential service, the session manager,
//! and the access policy. None of them keep per-request mutable state; the
//! user store is the single source of truth.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Credentials, users, and sessions
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::{BackendError, CredentialError};
pub use auth::service::CredentialService;
