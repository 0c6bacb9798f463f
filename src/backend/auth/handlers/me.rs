/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route is protected by the access policy, so the authentication
 * boundary has already placed a principal in the request extensions.
 *
 * # Response
 *
 * The principal's id, username and role, plus the (always empty) authority
 * list. No password hash.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice",
///   "role": "ADMIN",
///   "authorities": []
/// }
/// ```
pub async fn get_me(AuthUser(principal): AuthUser) -> Json<MeResponse> {
    let authorities = principal.authorities();
    Json(MeResponse {
        id: principal.user_id,
        username: principal.username,
        role: principal.role,
        authorities,
    })
}
