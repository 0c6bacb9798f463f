/**
 * Login Handlers
 *
 * Form login: `GET /login` serves the form and `POST /login` checks the
 * submitted credentials.
 *
 * # Authentication Process
 *
 * 1. `CredentialService::lookup` for the submitted username (one call per attempt)
 * 2. Verify the submitted password against the stored bcrypt hash
 * 3. Issue a session token in an HttpOnly cookie
 * 4. Redirect to `/`
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords both redirect to `/login?error`
 * - An unknown username still costs one bcrypt verification, against a decoy
 *   hash, so timing does not reveal which usernames exist
 * - Passwords are never logged
 */

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::types::{LoginForm, LoginPageParams};
use crate::backend::auth::principal::AuthenticatedPrincipal;
use crate::backend::auth::service::CredentialService;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::error::{BackendError, CredentialError};

/// Where a successful login lands
pub const LOGIN_SUCCESS_PATH: &str = "/";

/// Where a failed login lands
pub const LOGIN_FAILURE_PATH: &str = "/login?error";

/// Login page handler
///
/// Renders the login form, with a notice after a failed login or a logout.
pub async fn login_page(Query(params): Query<LoginPageParams>) -> Html<String> {
    Html(render_login_page(&params))
}

fn render_login_page(params: &LoginPageParams) -> String {
    let mut notice = String::new();
    if params.error.is_some() {
        notice.push_str(r#"<p class="alert alert-danger" role="alert">Bad credentials</p>"#);
    }
    if params.logout.is_some() {
        notice.push_str(r#"<p class="alert alert-success" role="alert">You have been signed out</p>"#);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Please sign in</title>
  </head>
  <body>
    <form method="post" action="/login">
      <h2>Please sign in</h2>
      {notice}
      <p>
        <label for="username">Username</label>
        <input type="text" id="username" name="username" required autofocus>
      </p>
      <p>
        <label for="password">Password</label>
        <input type="password" id="password" name="password" required>
      </p>
      <button type="submit">Sign in</button>
    </form>
  </body>
</html>
"#
    )
}

/// Login handler
///
/// # Returns
///
/// A `303 See Other` redirect: to `/` with a session cookie on success,
/// to `/login?error` on bad credentials.
///
/// # Errors
///
/// * `500 Internal Server Error` - Store failure or token creation failure
pub async fn login(
    State(credentials): State<CredentialService>,
    State(sessions): State<SessionManager>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), BackendError> {
    tracing::info!("Login attempt for: {}", form.username);

    let hasher = credentials.hasher().clone();

    let user = match credentials.lookup(&form.username).await {
        Ok(user) => user,
        Err(CredentialError::UserNotFound(_)) => {
            hasher.spawn_verify_decoy(form.password).await;
            tracing::warn!("Login failed for {}: unknown user", form.username);
            return Ok((jar, Redirect::to(LOGIN_FAILURE_PATH)));
        }
        Err(e) => return Err(e.into()),
    };

    if !hasher.spawn_verify(form.password, user.password_hash.clone()).await {
        tracing::warn!("Login failed for {}: wrong password", form.username);
        return Ok((jar, Redirect::to(LOGIN_FAILURE_PATH)));
    }

    let principal = AuthenticatedPrincipal::from(&user);
    let token = sessions.issue(&principal)?;

    tracing::info!("User logged in successfully: {} (id {})", user.username, user.id);

    Ok((jar.add(sessions.session_cookie(token)), Redirect::to(LOGIN_SUCCESS_PATH)))
}
