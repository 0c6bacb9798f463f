//! Database test fixtures
//!
//! PostgreSQL tests run only when `DATABASE_URL` is set; without it
//! `TestDatabase::from_env` returns `None` and the test returns early.

use sqlx::PgPool;
use uuid::Uuid;

use formauth::backend::server::init::connect_database;

/// Test database fixture
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect and migrate, if a database is configured
    pub async fn from_env() -> Option<Self> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => {
                eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
                return None;
            }
        };

        let pool = connect_database(&database_url)
            .await
            .expect("Failed to connect to test database");
        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Remove rows created by a test
    pub async fn delete_user(&self, username: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM user_auth WHERE user_name = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Username that cannot collide with other test runs
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
