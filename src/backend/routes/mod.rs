//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, middleware and fallback
//! - **`auth_routes`** - Registration, login, logout and account routes
//!
//! # Routes
//!
//! - `GET /` - Welcome message
//! - `POST /register` - User registration (JSON)
//! - `GET /login` - Login form
//! - `POST /login` - Form login
//! - `POST /logout` - End the session
//! - `GET /me` - Current principal (requires authentication)
//!
//! Every request passes through the authentication boundary first, so an
//! unknown path without a session is redirected to `/login` rather than
//! answered with a 404.
//!
//! # Example
//!
//! ```rust,no_run
//! use formauth::backend::routes::create_router;
//! use formauth::backend::server::state::AppState;
//!
//! # fn example(app_state: AppState) {
//! let router = create_router(app_state);
//! # }
//! ```

/// Main router creation
pub mod router;

/// Authentication route table
pub mod auth_routes;

pub use router::create_router;
