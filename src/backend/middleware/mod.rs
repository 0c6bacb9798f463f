//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`policy`** - The data-driven `AccessPolicy` table
//! - **`auth`** - The authentication boundary that applies it
//!
//! # Example
//!
//! ```rust,no_run
//! use formauth::backend::middleware::auth_boundary;
//! use formauth::backend::server::state::AppState;
//! use axum::{middleware, Router};
//!
//! # fn example(app_state: AppState) {
//! let router: Router<AppState> = Router::new()
//!     .layer(middleware::from_fn_with_state(app_state, auth_boundary));
//! # }
//! ```

pub mod auth;

pub mod policy;

pub use auth::{auth_boundary, resolve_principal, AuthUser};
pub use policy::{Access, AccessPolicy, AccessRule, PathPattern};
