//! Axum router configuration for authentication endpoints.

use axum::{middleware, routing::post, Router};

use super::handlers::{login, logout, refresh};
use crate::adapters::http::middleware::auth_middleware;
use crate::adapters::http::AppState;

/// Create the authentication router.
///
/// # Routes
/// - `POST /login` - public
/// - `POST /logout` - bearer token required
/// - `POST /refresh` - bearer token required
pub fn auth_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(logout))
        .route("/refresh", post(refresh))
        .route_layer(middleware::from_fn_with_state(
            state.auth_state(),
            auth_middleware,
        ));

    Router::new().route("/login", post(login)).merge(protected)
}
