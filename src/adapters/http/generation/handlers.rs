//! HTTP handler for content generation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::context::JsonPayload;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::translator::{Endpoint, Failure};
use crate::adapters::http::AppState;
use crate::application::handlers::GenerateContentCommand;
use crate::domain::generation::GenerationSpec;

/// POST /generation - Generate content and log it under the caller
pub async fn generate(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    payload: JsonPayload,
) -> Response {
    let JsonPayload { context, body } = payload;

    let result = async {
        let spec = GenerationSpec::from_payload(&body?, &state.generation_limits)?;
        let cmd = GenerateContentCommand {
            spec,
            requested_by: user.id,
        };
        Ok::<_, Failure>(state.generate_content_handler().handle(cmd).await?)
    }
    .await;

    match result {
        Ok(content) => (StatusCode::OK, Json(content)).into_response(),
        Err(failure) => {
            state
                .failures
                .respond(Endpoint::Generate, &context, module_path!(), failure)
                .await
        }
    }
}
