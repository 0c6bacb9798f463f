/**
 * Authentication Handler Types
 *
 * Request and response types for the authentication endpoints.
 * Request types carry plaintext passwords, so their `Debug` output redacts them.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned when a registration request does not name one
pub const DEFAULT_ROLE: &str = "USER";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// Registration request
///
/// JSON body of `POST /register`.
#[derive(Deserialize, Serialize)]
pub struct RegisterRequest {
    /// Desired username (non-empty, unique)
    pub username: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
    /// Free-form role; defaults to `USER`
    #[serde(default = "default_role")]
    pub role: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Login form
///
/// `application/x-www-form-urlencoded` body of `POST /login`.
#[derive(Deserialize, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Query flags accepted by `GET /login`
///
/// `?error` follows a failed login, `?logout` follows a logout.
#[derive(Deserialize, Debug, Default)]
pub struct LoginPageParams {
    pub error: Option<String>,
    pub logout: Option<String>,
}

/// Current user (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
    /// Always empty; roles are stored but not expanded to authorities
    pub authorities: Vec<String>,
}
