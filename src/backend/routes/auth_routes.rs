/**
 * Authentication Routes
 *
 * - `GET /` - Welcome message (public)
 * - `POST /register` - User registration (public)
 * - `GET /login` - Login form (public)
 * - `POST /login` - Form login (public)
 * - `POST /logout` - End the session (public)
 * - `GET /me` - Current principal (requires authentication)
 *
 * Which of these need a session is decided by the `AccessPolicy`, not here.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, login_page, logout, register, welcome};
use crate::backend::server::state::AppState;

/// Configure authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(welcome))
        .route("/register", post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .route("/me", get(get_me))
}
