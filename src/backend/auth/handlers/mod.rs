//! Authentication Handlers Module
//!
//! HTTP handlers for the registration and form-login endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - POST /register
//! ├── login.rs    - GET /login, POST /login
//! ├── logout.rs   - POST /logout
//! ├── home.rs     - GET /
//! └── me.rs       - GET /me
//! ```
//!
//! # Flow
//!
//! 1. **Register**: JSON username/password/role → user stored → confirmation text
//! 2. **Login**: form username/password → credentials verified → session cookie, redirect to `/`
//! 3. **Logout**: session cookie expired → redirect to `/login?logout`
//!
//! # Example
//!
//! ```rust,no_run
//! use formauth::backend::auth::handlers::{register, login, login_page};
//! use formauth::backend::server::state::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! # fn example() {
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", get(login_page).post(login));
//! # }
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Welcome page handler
pub mod home;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginForm, LoginPageParams, MeResponse, RegisterRequest};

// Re-export handlers
pub use home::welcome;
pub use login::{login, login_page};
pub use logout::logout;
pub use me::get_me;
pub use register::register;
