//! formauth - Main Library
//!
//! formauth is a small username/password registration and form-login backend
//! built on Axum. Users register with a username, password and role; passwords
//! are stored as bcrypt hashes; login establishes a cookie-carried session.
//!
//! # Overview
//!
//! The library provides:
//! - bcrypt password hashing with a tunable work factor
//! - A `UserStore` trait with in-memory and PostgreSQL implementations
//! - A `CredentialService` for registration and user lookup
//! - An authentication boundary (form login, logout, session cookies)
//!   driven by a data-driven access policy table
//!
//! # Module Structure
//!
//! - **`backend`** - Everything server-side
//!   - `auth` - hashing, user storage, credential service, sessions, handlers
//!   - `middleware` - access policy and the authentication boundary
//!   - `routes` - router assembly
//!   - `server` - configuration, state, and app creation
//!   - `error` - error types and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use formauth::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Backend server-side code
pub mod backend;
