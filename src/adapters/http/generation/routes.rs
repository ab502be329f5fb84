//! Axum router configuration for content generation.

use axum::{middleware, routing::post, Router};

use super::handlers::generate;
use crate::adapters::http::middleware::auth_middleware;
use crate::adapters::http::AppState;

/// Create the generation router. `POST /` requires a bearer token.
pub fn generation_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(generate))
        .route_layer(middleware::from_fn_with_state(
            state.auth_state(),
            auth_middleware,
        ))
}
