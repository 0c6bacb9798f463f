/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Parse the JSON body (`username`, `password`, optional `role`)
 * 2. Hand the request to `CredentialService::register`
 * 3. Respond with a fixed confirmation message
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - The response never contains the password or its hash; not even the
 *   created record is returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::service::CredentialService;
use crate::backend::error::BackendError;

/// Body returned on successful registration
pub const REGISTERED_MESSAGE: &str = "User saved successfully!";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or empty username
/// * `409 Conflict` - Username already registered
/// * `500 Internal Server Error` - Hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "securepassword123",
///   "role": "ADMIN"
/// }
/// ```
pub async fn register(
    State(credentials): State<CredentialService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), BackendError> {
    let Json(request) = payload.map_err(|rejection| {
        BackendError::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    tracing::info!("Registration request for username: {}", request.username);

    credentials
        .register(&request.username, &request.password, &request.role)
        .await?;

    Ok((StatusCode::OK, REGISTERED_MESSAGE))
}
