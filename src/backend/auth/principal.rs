/**
 * Authenticated Principal
 *
 * The shape the authentication boundary works with once a user has logged
 * in. It is built from a `UserRecord` at login and rebuilt from session
 * claims on later requests; it never carries the password hash.
 *
 * Roles are stored on the principal but expand to no authorities: access
 * decisions are only "authenticated or not".
 */

use serde::Serialize;

use crate::backend::auth::users::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedPrincipal {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

impl AuthenticatedPrincipal {
    /// Granted authorities; always empty, roles are not enforced
    pub fn authorities(&self) -> Vec<String> {
        Vec::new()
    }
}

impl From<&UserRecord> for AuthenticatedPrincipal {
    fn from(user: &UserRecord) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}
