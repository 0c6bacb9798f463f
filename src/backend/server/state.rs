/**
 * Application State
 *
 * `AppState` is the central state container shared by every handler. The
 * `FromRef` implementations let handlers extract just the part they use,
 * e.g. `State<CredentialService>`.
 *
 * # Example
 *
 * ```rust
 * use formauth::backend::auth::service::CredentialService;
 * use axum::extract::State;
 *
 * async fn handler(State(credentials): State<CredentialService>) {
 *     let _ = credentials.lookup("alice").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::CredentialService;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::middleware::policy::AccessPolicy;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Registration and credential lookup
    pub credentials: CredentialService,

    /// Session token issuing and verification
    pub sessions: SessionManager,

    /// Which paths need an authenticated principal
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(credentials: CredentialService, sessions: SessionManager, policy: AccessPolicy) -> Self {
        Self {
            credentials,
            sessions,
            policy: Arc::new(policy),
        }
    }
}

impl FromRef<AppState> for CredentialService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}

impl FromRef<AppState> for SessionManager {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
