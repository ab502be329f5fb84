//! Extractors that capture request facts for failure reporting.
//!
//! Handlers never let axum reject a body or path on its own: parse problems
//! are carried as [`Failure::MalformedInput`] so the endpoint's rule table
//! decides the response.

use std::convert::Infallible;

use axum::{
    body::to_bytes,
    extract::{FromRequest, FromRequestParts, OriginalUri, Request},
    http::request::Parts,
};
use serde_json::Value;

use super::translator::Failure;
use crate::domain::diagnostics::RequestContext;
use crate::domain::foundation::{AuthenticatedUser, UserId};

/// Largest body read before giving up on it as malformed.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Builds the context of a request from its head.
///
/// Nested routers strip their prefix from the URI, so the original URI is
/// preferred when present.
pub fn context_from_parts(parts: &Parts) -> RequestContext {
    let path = parts
        .extensions
        .get::<OriginalUri>()
        .map(|uri| uri.0.path())
        .unwrap_or_else(|| parts.uri.path());

    let context = RequestContext::new(parts.method.as_str(), path);
    match parts.extensions.get::<AuthenticatedUser>() {
        Some(user) => context.with_user(user.id),
        None => context,
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Ok(context_from_parts(parts)) })
    }
}

/// A JSON body together with the context it arrived in.
///
/// An empty body reads as an empty object. The body is recorded in the
/// context only when it parsed.
#[derive(Debug)]
pub struct JsonPayload {
    pub context: RequestContext,
    pub body: Result<Value, Failure>,
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request<'life0, 'async_trait>(
        req: Request,
        _state: &'life0 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let context = context_from_parts(&parts);

            let body = match to_bytes(body, BODY_LIMIT).await {
                Ok(bytes) => parse_body(&bytes),
                Err(err) => Err(Failure::malformed(err.to_string())),
            };

            let context = match &body {
                Ok(value) if RequestContext::method_has_body(context.method.as_str()) => {
                    context.with_data(value.clone())
                }
                _ => context,
            };

            Ok(JsonPayload { context, body })
        })
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, Failure> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(bytes).map_err(|e| Failure::malformed(e.to_string()))
}

/// Parses a `{id}` path segment.
pub fn parse_user_id(raw: &str) -> Result<UserId, Failure> {
    raw.parse::<UserId>()
        .map_err(|e| Failure::malformed(format!("user id '{raw}': {e}")))
}
