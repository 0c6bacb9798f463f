/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers.
 * Every variant maps to a status code and a message that is safe to show
 * to the client.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Errors raised directly by a handler, such as a malformed request body.
 *
 * ## Credential Errors
 *
 * Errors from the credential core. Client-caused failures keep their message;
 * infrastructure failures are reported as a generic internal error and the
 * details go to the log.
 *
 * ## Session Errors
 *
 * Failures to issue a session token.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::auth::sessions::SessionError;
use crate::backend::error::credential::CredentialError;

/// Message used for every failure whose details must stay server-side
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message used for every failed authentication, whatever the cause
pub const BAD_CREDENTIALS_MESSAGE: &str = "Bad credentials";

/// Backend-specific error types
///
/// ```rust
/// use formauth::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g. malformed request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Error from the credential core
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Error issuing or reading a session token
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `EmptyUsername` - 400 Bad Request
    /// - `DuplicateUsername` - 409 Conflict
    /// - `UserNotFound` - 401 Unauthorized
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Credential(err) => match err {
                CredentialError::EmptyUsername => StatusCode::BAD_REQUEST,
                CredentialError::DuplicateUsername(_) => StatusCode::CONFLICT,
                CredentialError::UserNotFound(_) => StatusCode::UNAUTHORIZED,
                CredentialError::Hashing(_)
                | CredentialError::Database(_)
                | CredentialError::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Unknown users get the same message as wrong passwords, and
    /// infrastructure failures never expose their cause.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Credential(CredentialError::UserNotFound(_)) => BAD_CREDENTIALS_MESSAGE.to_string(),
            Self::Credential(err) if err.is_client_error() => err.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
