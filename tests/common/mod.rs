//! Shared harness for the HTTP integration tests.
//!
//! Builds the full router over in-memory stores, a mock completion provider
//! and real JWT/bcrypt adapters (cost 4).

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use hr_assist::adapters::ai::MockAIProvider;
use hr_assist::adapters::auth::{BcryptPasswordHasher, JwtSessionValidator, JwtTokenService};
use hr_assist::adapters::http::{routes, AppState, FailureResponder};
use hr_assist::adapters::memory::{
    InMemoryDiagnosticLogRepository, InMemoryGenerationLogRepository, InMemoryTokenBlacklist,
    InMemoryUserRepository,
};
use hr_assist::application::DiagnosticLogger;
use hr_assist::config::GenerationLimits;
use hr_assist::domain::auth::TokenKind;
use hr_assist::domain::foundation::UserId;
use hr_assist::domain::generation::GenerationSettings;
use hr_assist::domain::user::{NewUser, User};
use hr_assist::ports::{PasswordHasher, TokenService, UserRepository};

pub const SECRET: &[u8] = b"integration-test-secret-with-32-bytes!";
pub const PASSWORD: &str = "Str0ng!Pass";
pub const MODEL: &str = "gpt-4o-mini";

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub blacklist: Arc<InMemoryTokenBlacklist>,
    pub generation_logs: Arc<InMemoryGenerationLogRepository>,
    pub diagnostics: Arc<InMemoryDiagnosticLogRepository>,
    pub tokens: Arc<JwtTokenService>,
    pub hasher: BcryptPasswordHasher,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_provider(MockAIProvider::new())
    }

    pub fn with_provider(provider: MockAIProvider) -> Self {
        Self::with_provider_timeout(provider, Duration::from_secs(5))
    }

    pub fn with_provider_timeout(provider: MockAIProvider, timeout: Duration) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let generation_logs = Arc::new(InMemoryGenerationLogRepository::new());
        let diagnostics = Arc::new(InMemoryDiagnosticLogRepository::new());
        let tokens = Arc::new(JwtTokenService::new(SECRET, 300, 86_400));
        let hasher = BcryptPasswordHasher::new(4);

        let state = AppState {
            users: users.clone(),
            password_hasher: Arc::new(hasher),
            tokens: tokens.clone(),
            token_blacklist: blacklist.clone(),
            session_validator: Arc::new(JwtSessionValidator::new(tokens.clone(), users.clone())),
            ai_provider: Arc::new(provider),
            generation_logs: generation_logs.clone(),
            generation_settings: GenerationSettings {
                model: MODEL.to_string(),
                temperature: 0.7,
                timeout,
            },
            generation_limits: GenerationLimits::default(),
            failures: FailureResponder::new(DiagnosticLogger::new(diagnostics.clone())),
        };

        Self {
            router: routes(state),
            users,
            blacklist,
            generation_logs,
            diagnostics,
            tokens,
            hasher,
        }
    }

    /// Stores an account whose password is [`PASSWORD`].
    pub async fn seed_user(&self, username: &str, is_active: bool, is_superuser: bool) -> User {
        let password_hash = self.hasher.hash(PASSWORD).await.unwrap();
        self.users
            .create(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash,
                is_active,
                is_superuser,
            })
            .await
            .unwrap()
    }

    pub fn access_token(&self, user_id: UserId) -> String {
        self.tokens.issue(user_id, TokenKind::Access).unwrap().token
    }

    pub fn refresh_token(&self, user_id: UserId) -> String {
        self.tokens.issue(user_id, TokenKind::Refresh).unwrap().token
    }

    /// Seeds an active regular account and returns its access token.
    pub async fn caller_token(&self) -> String {
        let caller = self.seed_user("caller", true, false).await;
        self.access_token(caller.id)
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        self.send("POST", uri, token, Some(&body.to_string())).await
    }
}
