//! Authentication test helpers
//!
//! Builds the full router over an in-memory store with the cheapest bcrypt
//! cost and a fixed session secret, and drives register/login through it.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use serde_json::json;

use formauth::backend::auth::password::MIN_COST;
use formauth::backend::auth::store::{InMemoryUserStore, UserStore};
use formauth::backend::routes::create_router;
use formauth::backend::server::config::ServerConfig;
use formauth::backend::server::init::build_state;
use formauth::backend::server::state::AppState;

pub const TEST_SESSION_SECRET: &str = "integration-test-secret";

/// Server configuration for tests
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.bcrypt_cost = MIN_COST;
    config.session.secret = Some(TEST_SESSION_SECRET.to_string());
    config
}

/// Application state over a fresh in-memory store
pub fn test_state() -> AppState {
    test_state_with(Arc::new(InMemoryUserStore::new()))
}

pub fn test_state_with(store: Arc<dyn UserStore>) -> AppState {
    build_state(&test_config(), store)
}

/// Test server over a fresh in-memory store
pub fn test_server() -> TestServer {
    test_server_for(test_state())
}

pub fn test_server_for(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Name of the session cookie the test server issues
pub fn session_cookie_name() -> String {
    test_config().session.cookie_name
}

/// `POST /register`
pub async fn register_user(server: &TestServer, username: &str, password: &str, role: &str) -> TestResponse {
    server
        .post("/register")
        .json(&json!({
            "username": username,
            "password": password,
            "role": role,
        }))
        .await
}

/// `POST /login` with form fields
pub async fn login_user(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
}
