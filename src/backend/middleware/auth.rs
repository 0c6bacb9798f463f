/**
 * Authentication Boundary
 *
 * Middleware that resolves the caller's session and enforces the access
 * policy on every request.
 *
 * 1. Read the session token from the session cookie, or from an
 *    `Authorization: Bearer` header when the cookie is absent or invalid
 * 2. Verify it and, if valid, attach an `AuthenticatedPrincipal` to the
 *    request extensions
 * 3. Look up the path in the `AccessPolicy`; a protected path without a
 *    principal is redirected to `/login`
 *
 * An invalid or expired token is treated like no token at all.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::principal::AuthenticatedPrincipal;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::middleware::policy::Access;
use crate::backend::server::state::AppState;

/// Where unauthenticated requests for protected paths are sent
pub const LOGIN_PAGE_PATH: &str = "/login";

/// Authentication boundary middleware
pub async fn auth_boundary(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = resolve_principal(&app_state.sessions, &jar, request.headers());
    let access = app_state.policy.access_for(request.uri().path());

    tracing::debug!(
        "{} {} requires {:?}, principal: {:?}",
        request.method(),
        request.uri().path(),
        access,
        principal.as_ref().map(|p| p.username.as_str())
    );

    match (access, principal) {
        (_, Some(principal)) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        (Access::PermitAll, None) => next.run(request).await,
        (Access::Authenticated, None) => {
            tracing::warn!("Unauthenticated request to {}, redirecting to login", request.uri().path());
            Redirect::to(LOGIN_PAGE_PATH).into_response()
        }
    }
}

/// Resolve the session token on a request into a principal
///
/// The cookie is tried first; when it is missing or fails to verify the
/// `Authorization` header is tried.
pub fn resolve_principal(
    sessions: &SessionManager,
    jar: &CookieJar,
    headers: &HeaderMap,
) -> Option<AuthenticatedPrincipal> {
    let cookie_token = jar
        .get(sessions.cookie_name())
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty());

    cookie_token
        .and_then(|token| verify_token(sessions, &token, "cookie"))
        .or_else(|| bearer_token(headers).and_then(|token| verify_token(sessions, &token, "bearer")))
}

fn verify_token(sessions: &SessionManager, token: &str, source: &str) -> Option<AuthenticatedPrincipal> {
    match sessions.verify(token) {
        Ok(principal) => Some(principal),
        Err(e) => {
            tracing::warn!("Ignoring {} session token: {}", source, e);
            None
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Axum extractor for the authenticated principal
///
/// Rejects with `401 Unauthorized` when the boundary attached no principal,
/// which only happens on a route the policy leaves public.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedPrincipal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedPrincipal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedPrincipal not found in request extensions");
                StatusCode::UNAUTHORIZED
            })
    }
}
