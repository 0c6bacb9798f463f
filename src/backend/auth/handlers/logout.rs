/**
 * Logout Handler
 *
 * `POST /logout` revokes the session token, expires the session cookie and
 * sends the browser back to the login page with a signed-out notice.
 */

use axum::{extract::State, response::Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::SessionManager;

/// Where a logout lands
pub const LOGOUT_SUCCESS_PATH: &str = "/login?logout";

pub async fn logout(State(sessions): State<SessionManager>, jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("Logout requested");
    if let Some(cookie) = jar.get(sessions.cookie_name()) {
        sessions.revoke(cookie.value());
    }
    (jar.add(sessions.logout_cookie()), Redirect::to(LOGOUT_SUCCESS_PATH))
}
