//! Axum router configuration for user management endpoints.

use axum::{middleware, routing::get, Router};

use super::handlers::{create_user, delete_user, get_user, list_users, update_user};
use crate::adapters::http::middleware::auth_middleware;
use crate::adapters::http::AppState;

/// Create the users router. Every route requires a bearer token.
///
/// # Routes
/// - `GET /` and `POST /`
/// - `GET /:id`, `PUT /:id` and `DELETE /:id`
pub fn users_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.auth_state(),
            auth_middleware,
        ))
}
