/**
 * PostgreSQL User Store
 *
 * Users live in the `user_auth` table created by the embedded migrations.
 * Username uniqueness is the table's `UNIQUE (user_name)` constraint; a
 * violating insert is reported as `DuplicateUsername`.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use super::UserStore;
use crate::backend::auth::users::{UserRecord, UserRecordDraft};
use crate::backend::error::CredentialError;

/// User store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, CredentialError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, user_name, password, role
            FROM user_auth
            WHERE user_name = $1
            "#
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, draft: UserRecordDraft) -> Result<UserRecord, CredentialError> {
        let result = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO user_auth (user_name, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, user_name, password, role
            "#
        )
        .bind(&draft.username)
        .bind(&draft.password_hash)
        .bind(&draft.role)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(CredentialError::DuplicateUsername(draft.username))
            }
            Err(e) => Err(e.into()),
        }
    }
}
