//! HTTP adapters - REST API implementations.
//!
//! Each capability has its own router; [`api_router`] mounts them under
//! `/v1/api` and applies the cross-cutting tower layers.

pub mod auth;
pub mod context;
pub mod generation;
pub mod middleware;
mod state;
pub mod translator;
pub mod users;

pub use auth::auth_router;
pub use generation::generation_router;
pub use state::AppState;
pub use translator::{translate, Endpoint, Failure, FailureKind, FailureResponder, Translation};
pub use users::users_router;

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    http::{HeaderValue, StatusCode},
    response::Response,
    routing::get,
    BoxError, Json, Router,
};
use serde_json::{json, Value};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::domain::messages::{INTERNAL_SERVER_ERROR, REQUEST_TIMEOUT};
use translator::message_response;

/// Prefix under which every capability router is nested.
pub const API_PREFIX: &str = "/v1/api";

/// Routes of every capability, without tower layers.
pub fn routes(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", auth_router(&state))
        .nest("/users", users_router(&state))
        .nest("/generation", generation_router(&state));

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, api)
        .with_state(state)
}

/// Full application router with tracing, CORS, timeout and request ids.
pub fn api_router(state: AppState, server: &ServerConfig) -> Router {
    with_request_timeout(routes(state), server.request_timeout())
        .layer(CompressionLayer::new())
        .layer(cors_layer(server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Bounds every request; an elapsed request answers 408 with a message body.
pub fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

async fn handle_timeout_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        message_response(StatusCode::REQUEST_TIMEOUT, REQUEST_TIMEOUT)
    } else {
        tracing::error!(error = %err, "request middleware failed");
        message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }
}

/// Configured origins, or any origin when none are listed.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
