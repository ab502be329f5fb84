//! Failure → HTTP response translation.
//!
//! Every endpoint declares which failure kinds it expects and the status and
//! message each one produces. [`translate`] is pure: it only looks up the
//! endpoint's rule table. Kinds an endpoint does not declare are unexpected
//! and become a generic 500 after a diagnostic record is written.
//!
//! # Rule tables
//!
//! Malformed input covers unparseable bodies and non-integer path ids.
//!
//! | Endpoint | Rules (first match wins) |
//! |----------|--------------------------|
//! | Login | Malformed 400, Validation 400 (fields), InvalidCredentials 401, InactiveUser 403 |
//! | Logout, Refresh | Malformed 400, Validation 400, InvalidToken 401 |
//! | ListUsers | none |
//! | CreateUser | Malformed 400, Validation 400 (fields), UsernameTaken 409 |
//! | GetUser | Malformed 400, InvalidUserId 400, NotFound 404 |
//! | UpdateUser | Malformed 400, Validation 400 (fields), InvalidUserId 400, Protected 403, NotFound 404, UsernameTaken 409 |
//! | DeleteUser | Malformed 400, InvalidUserId 400, Protected 403, NotFound 404 |
//! | Generate | Malformed 400, Validation 400 (fields), FailedDependency 424 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::application::DiagnosticLogger;
use crate::domain::auth::{self, AuthError};
use crate::domain::diagnostics::{traceback, FailureOrigin, RequestContext};
use crate::domain::foundation::FieldErrors;
use crate::domain::generation::{self, GenerationError};
use crate::domain::messages::{BAD_REQUEST, INTERNAL_SERVER_ERROR};
use crate::domain::user::{self, UserError};

/// Every route whose failures are translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Logout,
    Refresh,
    ListUsers,
    CreateUser,
    GetUser,
    UpdateUser,
    DeleteUser,
    Generate,
}

impl Endpoint {
    /// Capability the endpoint belongs to.
    pub fn module(self) -> &'static str {
        match self {
            Endpoint::Login | Endpoint::Logout | Endpoint::Refresh => "auth",
            Endpoint::ListUsers
            | Endpoint::CreateUser
            | Endpoint::GetUser
            | Endpoint::UpdateUser
            | Endpoint::DeleteUser => "users",
            Endpoint::Generate => "generation",
        }
    }

    /// Name of the HTTP handler serving the endpoint.
    pub fn function_name(self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Logout => "logout",
            Endpoint::Refresh => "refresh",
            Endpoint::ListUsers => "list_users",
            Endpoint::CreateUser => "create_user",
            Endpoint::GetUser => "get_user",
            Endpoint::UpdateUser => "update_user",
            Endpoint::DeleteUser => "delete_user",
            Endpoint::Generate => "generate",
        }
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            Endpoint::Login => LOGIN_RULES,
            Endpoint::Logout | Endpoint::Refresh => TOKEN_RULES,
            Endpoint::ListUsers => &[],
            Endpoint::CreateUser => CREATE_USER_RULES,
            Endpoint::GetUser => GET_USER_RULES,
            Endpoint::UpdateUser => UPDATE_USER_RULES,
            Endpoint::DeleteUser => DELETE_USER_RULES,
            Endpoint::Generate => GENERATE_RULES,
        }
    }
}

/// Category of a failure, independent of the endpoint that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MalformedInput,
    FieldValidation,
    InvalidCredentials,
    InactiveUser,
    InvalidOrExpiredToken,
    ProtectedAccount,
    NotFound,
    UniquenessConflict,
    InvalidIdentifier,
    DependencyFailure,
    Unexpected,
}

/// Anything that can stop a request before it succeeds.
#[derive(Debug, Error)]
pub enum Failure {
    /// The body or a path segment could not be parsed at all.
    #[error("malformed request: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Validation(#[from] FieldErrors),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl Failure {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Failure::MalformedInput(detail.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::MalformedInput(_) => FailureKind::MalformedInput,
            Failure::Validation(_) => FailureKind::FieldValidation,
            Failure::Auth(err) => match err {
                AuthError::InvalidCredentials => FailureKind::InvalidCredentials,
                AuthError::InactiveUser => FailureKind::InactiveUser,
                AuthError::InvalidToken => FailureKind::InvalidOrExpiredToken,
                AuthError::Infrastructure(_) => FailureKind::Unexpected,
            },
            Failure::User(err) => match err {
                UserError::InvalidUserId(_) => FailureKind::InvalidIdentifier,
                UserError::NotFound(_) => FailureKind::NotFound,
                UserError::Protected(_) => FailureKind::ProtectedAccount,
                UserError::UsernameTaken(_) => FailureKind::UniquenessConflict,
                UserError::Infrastructure(_) => FailureKind::Unexpected,
            },
            Failure::Generation(err) => match err {
                GenerationError::FailedDependency(_) => FailureKind::DependencyFailure,
                GenerationError::Infrastructure(_) => FailureKind::Unexpected,
            },
        }
    }
}

/// Body written for a matched rule.
#[derive(Debug, Clone, Copy)]
enum RuleBody {
    Message(&'static str),
    /// The collected field errors, or [`BAD_REQUEST`] when there are none.
    FieldErrors,
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    kind: FailureKind,
    status: StatusCode,
    body: RuleBody,
}

const fn rule(kind: FailureKind, status: StatusCode, body: RuleBody) -> Rule {
    Rule { kind, status, body }
}

const MALFORMED: Rule = rule(
    FailureKind::MalformedInput,
    StatusCode::BAD_REQUEST,
    RuleBody::Message(BAD_REQUEST),
);

const FIELD_ERRORS: Rule = rule(
    FailureKind::FieldValidation,
    StatusCode::BAD_REQUEST,
    RuleBody::FieldErrors,
);

const INVALID_USER_ID: Rule = rule(
    FailureKind::InvalidIdentifier,
    StatusCode::BAD_REQUEST,
    RuleBody::Message(user::messages::INVALID_USER_ID),
);

const PROTECTED: Rule = rule(
    FailureKind::ProtectedAccount,
    StatusCode::FORBIDDEN,
    RuleBody::Message(user::messages::USER_PROTECTED),
);

const USER_NOT_FOUND: Rule = rule(
    FailureKind::NotFound,
    StatusCode::NOT_FOUND,
    RuleBody::Message(user::messages::USER_NOT_FOUND),
);

const USERNAME_TAKEN: Rule = rule(
    FailureKind::UniquenessConflict,
    StatusCode::CONFLICT,
    RuleBody::Message(user::messages::USERNAME_TAKEN),
);

static LOGIN_RULES: &[Rule] = &[
    MALFORMED,
    FIELD_ERRORS,
    rule(
        FailureKind::InvalidCredentials,
        StatusCode::UNAUTHORIZED,
        RuleBody::Message(auth::messages::INVALID_CREDENTIALS),
    ),
    rule(
        FailureKind::InactiveUser,
        StatusCode::FORBIDDEN,
        RuleBody::Message(auth::messages::INACTIVE_USER),
    ),
];

// Token payload problems never echo field details.
static TOKEN_RULES: &[Rule] = &[
    MALFORMED,
    rule(
        FailureKind::FieldValidation,
        StatusCode::BAD_REQUEST,
        RuleBody::Message(BAD_REQUEST),
    ),
    rule(
        FailureKind::InvalidOrExpiredToken,
        StatusCode::UNAUTHORIZED,
        RuleBody::Message(auth::messages::INVALID_TOKEN),
    ),
];

static CREATE_USER_RULES: &[Rule] = &[MALFORMED, FIELD_ERRORS, USERNAME_TAKEN];

static GET_USER_RULES: &[Rule] = &[MALFORMED, INVALID_USER_ID, USER_NOT_FOUND];

static UPDATE_USER_RULES: &[Rule] = &[
    MALFORMED,
    FIELD_ERRORS,
    INVALID_USER_ID,
    PROTECTED,
    USER_NOT_FOUND,
    USERNAME_TAKEN,
];

static DELETE_USER_RULES: &[Rule] = &[MALFORMED, INVALID_USER_ID, PROTECTED, USER_NOT_FOUND];

static GENERATE_RULES: &[Rule] = &[
    MALFORMED,
    FIELD_ERRORS,
    rule(
        FailureKind::DependencyFailure,
        StatusCode::FAILED_DEPENDENCY,
        RuleBody::Message(generation::messages::FAILED_DEPENDENCY),
    ),
];

/// Outcome of looking a failure up in an endpoint's rule table.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    Categorized { status: StatusCode, body: Value },
    Unexpected,
}

/// Maps a failure to the response declared for it on `endpoint`.
pub fn translate(endpoint: Endpoint, failure: &Failure) -> Translation {
    let kind = failure.kind();
    let Some(rule) = endpoint.rules().iter().find(|rule| rule.kind == kind) else {
        return Translation::Unexpected;
    };

    let message = match (rule.body, failure) {
        (RuleBody::FieldErrors, Failure::Validation(errors)) if !errors.is_empty() => {
            errors.to_json()
        }
        (RuleBody::FieldErrors, _) => Value::from(BAD_REQUEST),
        (RuleBody::Message(message), _) => Value::from(message),
    };

    Translation::Categorized {
        status: rule.status,
        body: json!({ "message": message }),
    }
}

/// `{"message": ...}` response with the given status.
pub fn message_response(status: StatusCode, message: impl Into<Value>) -> Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}

/// Turns failures into responses, recording the unexpected ones.
#[derive(Clone)]
pub struct FailureResponder {
    diagnostics: DiagnosticLogger,
}

impl FailureResponder {
    pub fn new(diagnostics: DiagnosticLogger) -> Self {
        Self { diagnostics }
    }

    /// Builds the response for `failure` raised while serving `endpoint`.
    ///
    /// `logger_name` is the module path of the handler that gave up.
    pub async fn respond(
        &self,
        endpoint: Endpoint,
        context: &RequestContext,
        logger_name: &str,
        failure: Failure,
    ) -> Response {
        match translate(endpoint, &failure) {
            Translation::Categorized { status, body } => {
                tracing::info!(
                    endpoint = endpoint.function_name(),
                    status = status.as_u16(),
                    message = %body["message"],
                    "request rejected"
                );
                (status, Json(body)).into_response()
            }
            Translation::Unexpected => {
                let origin =
                    FailureOrigin::new(logger_name, endpoint.module(), endpoint.function_name());
                self.unexpected(context, &origin, &failure).await
            }
        }
    }

    /// Records an unexpected failure and returns the generic 500.
    pub async fn unexpected(
        &self,
        context: &RequestContext,
        origin: &FailureOrigin,
        error: &(dyn std::error::Error + Send + Sync + 'static),
    ) -> Response {
        self.diagnostics
            .record(context, origin, &traceback(error))
            .await;
        message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }
}
