/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Layer Order
 *
 * 1. `TraceLayer` - request/response logging (outermost)
 * 2. `auth_boundary` - session resolution and access policy
 * 3. Routes and the 404 fallback
 *
 * The fallback is registered before the layers so it sits behind the
 * authentication boundary too.
 */

use axum::{http::StatusCode, middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::auth::auth_boundary;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Message for paths no route matches
pub const NOT_FOUND_MESSAGE: &str = "404 Not Found";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE) });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(app_state.clone(), auth_boundary)),
        )
        .with_state(app_state)
}
