//! HTTP handlers for authentication endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{AccessTokenResponse, MessageResponse, TokenPairResponse};
use crate::adapters::http::context::JsonPayload;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::translator::{Endpoint, Failure};
use crate::adapters::http::AppState;
use crate::domain::auth::{messages, LoginRequest, RefreshTokenRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /auth/login - Exchange credentials for a token pair
pub async fn login(State(state): State<AppState>, payload: JsonPayload) -> Response {
    let JsonPayload { context, body } = payload;

    let result = async {
        let request = LoginRequest::from_payload(&body?)?;
        let pair = state.login_handler().handle(request).await?;
        Ok::<_, Failure>(TokenPairResponse::from(pair))
    }
    .await;

    match result {
        Ok(tokens) => (StatusCode::OK, Json(tokens)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::Login, &context, module_path!(), failure)
                .await
        }
    }
}

/// POST /auth/logout - Blacklist the submitted refresh token
///
/// Access tokens stay valid until they expire.
pub async fn logout(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: JsonPayload,
) -> Response {
    let JsonPayload { context, body } = payload;

    let result = async {
        let request = RefreshTokenRequest::from_payload(&body?)?;
        state.logout_handler().handle(request).await?;
        Ok::<_, Failure>(MessageResponse::new(messages::LOGOUT_SUCCESS))
    }
    .await;

    match result {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::Logout, &context, module_path!(), failure)
                .await
        }
    }
}

/// POST /auth/refresh - Issue a new access token
pub async fn refresh(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: JsonPayload,
) -> Response {
    let JsonPayload { context, body } = payload;

    let result = async {
        let request = RefreshTokenRequest::from_payload(&body?)?;
        let access_token = state.refresh_access_handler().handle(request).await?;
        Ok::<_, Failure>(AccessTokenResponse { access_token })
    }
    .await;

    match result {
        Ok(token) => (StatusCode::OK, Json(token)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::Refresh, &context, module_path!(), failure)
                .await
        }
    }
}
