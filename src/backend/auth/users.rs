/**
 * User Model
 *
 * The persisted user record and the draft that precedes it.
 *
 * A `UserRecord` maps onto the `user_auth` table:
 *
 * | field           | column      |
 * |-----------------|-------------|
 * | `id`            | `id`        |
 * | `username`      | `user_name` |
 * | `password_hash` | `password`  |
 * | `role`          | `role`      |
 *
 * Neither type implements `Serialize`, and their `Debug` output redacts the
 * password hash, so a record cannot end up in a response body or a log line
 * with its hash attached.
 */

use std::fmt;

/// A user as stored, with its store-assigned id
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    /// Surrogate key, assigned on insert and never reused
    pub id: i64,
    /// Unique, case-sensitive username
    #[sqlx(rename = "user_name")]
    pub username: String,
    /// bcrypt hash of the password
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Free-form role, stored but not enforced
    pub role: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// A user about to be inserted; the store assigns the id
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecordDraft {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl UserRecordDraft {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role: role.into(),
        }
    }

    /// Turn the draft into a record with the given id
    pub fn into_record(self, id: i64) -> UserRecord {
        UserRecord {
            id,
            username: self.username,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}

impl fmt::Debug for UserRecordDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecordDraft")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
