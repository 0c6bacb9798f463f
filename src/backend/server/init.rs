/**
 * Server Initialization
 *
 * Builds the user store, the services and the router from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. With a `database_url`: connect, run migrations, use `PgUserStore`
 * 2. Without one: use `InMemoryUserStore` (users are lost on restart)
 * 3. Build `CredentialService`, `SessionManager` and the standard `AccessPolicy`
 * 4. Create the router
 *
 * A configured database that cannot be reached is a startup error; the
 * server never silently falls back to memory.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::CredentialService;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::auth::store::{InMemoryUserStore, PgUserStore, UserStore};
use crate::backend::middleware::policy::AccessPolicy;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing formauth backend server");

    let store: Arc<dyn UserStore> = match &config.database_url {
        Some(url) => Arc::new(PgUserStore::new(connect_database(url).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set. Users are kept in memory and lost on restart.");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let app = create_router(build_state(config, store));
    tracing::info!("Router configured");

    Ok(app)
}

/// Build the application state around an existing user store
pub fn build_state(config: &ServerConfig, store: Arc<dyn UserStore>) -> AppState {
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    if !hasher.prepare_decoy() {
        tracing::warn!("Could not prepare decoy password hash at cost {}", config.bcrypt_cost);
    }
    let credentials = CredentialService::new(store, hasher);
    let sessions = SessionManager::new(&config.session);
    AppState::new(credentials, sessions, AccessPolicy::standard())
}

/// Connect to PostgreSQL and bring the schema up to date
pub async fn connect_database(database_url: &str) -> Result<PgPool, StartupError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::password::MIN_COST;
    use crate::backend::middleware::policy::Access;

    fn test_config() -> ServerConfig {
        let mut config = ServerConfig::default();
        config.bcrypt_cost = MIN_COST;
        config.session.secret = Some("init-test-secret".to_string());
        config
    }

    #[tokio::test]
    async fn test_build_state_wires_config() {
        let config = test_config();
        let state = build_state(&config, Arc::new(InMemoryUserStore::new()));

        assert_eq!(state.credentials.hasher().cost(), MIN_COST);
        assert_eq!(state.sessions.cookie_name(), config.session.cookie_name);
        assert_eq!(state.policy.access_for("/me"), Access::Authenticated);
        assert_eq!(state.policy.access_for("/register"), Access::PermitAll);
    }

    #[tokio::test]
    async fn test_build_state_prepares_decoy() {
        let state = build_state(&test_config(), Arc::new(InMemoryUserStore::new()));
        assert!(state.credentials.hasher().is_decoy_prepared());
    }

    #[tokio::test]
    async fn test_create_app_without_database() {
        assert!(create_app(&test_config()).await.is_ok());
    }
}
