//! HTTP handlers for user management endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::UserResponse;
use crate::adapters::http::auth::MessageResponse;
use crate::adapters::http::context::{parse_user_id, JsonPayload};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::translator::{Endpoint, Failure};
use crate::adapters::http::AppState;
use crate::domain::diagnostics::RequestContext;
use crate::domain::user::{messages, UpdateUserData, UserData};

// ════════════════════════════════════════════════════════════════════════════════
// Collection
// ════════════════════════════════════════════════════════════════════════════════

/// GET /users - List every non-superuser account
pub async fn list_users(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    context: RequestContext,
) -> Response {
    match state.list_users_handler().handle().await {
        Ok(profiles) => {
            let users: Vec<UserResponse> = profiles.into_iter().map(UserResponse::from).collect();
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(err) => {
            state
                .failures
                .respond(Endpoint::ListUsers, &context, module_path!(), err.into())
                .await
        }
    }
}

/// POST /users - Create an active, non-superuser account
pub async fn create_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: JsonPayload,
) -> Response {
    let JsonPayload { context, body } = payload;

    let result = async {
        let data = UserData::from_payload(&body?)?;
        state.create_user_handler().handle(data).await?;
        Ok::<_, Failure>(MessageResponse::new(messages::USER_CREATED))
    }
    .await;

    match result {
        Ok(message) => (StatusCode::CREATED, Json(message)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::CreateUser, &context, module_path!(), failure)
                .await
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Single account
// ════════════════════════════════════════════════════════════════════════════════

/// GET /users/{id} - Show one account
pub async fn get_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    context: RequestContext,
) -> Response {
    let result = async {
        let user_id = parse_user_id(&id)?;
        let profile = state.get_user_handler().handle(user_id).await?;
        Ok::<_, Failure>(UserResponse::from(profile))
    }
    .await;

    match result {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::GetUser, &context, module_path!(), failure)
                .await
        }
    }
}

/// PUT /users/{id} - Replace username, email and password
///
/// Protection is checked before the body so a superuser account answers 403
/// whatever was submitted.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    payload: JsonPayload,
) -> Response {
    let JsonPayload { context, body } = payload;

    let result = async {
        let user_id = parse_user_id(&id)?;
        let handler = state.update_user_handler();
        handler.ensure_mutable(user_id).await?;

        let data = UserData::from_payload(&body?)?;
        handler.handle(UpdateUserData::new(user_id, data)).await?;
        Ok::<_, Failure>(MessageResponse::new(messages::USER_UPDATED))
    }
    .await;

    match result {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::UpdateUser, &context, module_path!(), failure)
                .await
        }
    }
}

/// DELETE /users/{id} - Deactivate an account
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    context: RequestContext,
) -> Response {
    let result = async {
        let user_id = parse_user_id(&id)?;
        state.deactivate_user_handler().handle(user_id).await?;
        Ok::<_, Failure>(MessageResponse::new(messages::USER_DELETED))
    }
    .await;

    match result {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::DeleteUser, &context, module_path!(), failure)
                .await
        }
    }
}
