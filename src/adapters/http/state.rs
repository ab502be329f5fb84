//! Shared state for every HTTP route.

use std::sync::Arc;

use super::middleware::AuthState;
use super::translator::FailureResponder;
use crate::application::handlers::{
    CreateUserHandler, DeactivateUserHandler, GenerateContentHandler, GetUserHandler,
    ListUsersHandler, LoginHandler, LogoutHandler, RefreshAccessHandler, UpdateUserHandler,
};
use crate::config::GenerationLimits;
use crate::domain::generation::GenerationSettings;
use crate::ports::{
    AIProvider, GenerationLogRepository, PasswordHasher, SessionValidator, TokenBlacklist,
    TokenService, UserRepository,
};

/// Ports and settings the handlers are built from.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub token_blacklist: Arc<dyn TokenBlacklist>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub ai_provider: Arc<dyn AIProvider>,
    pub generation_logs: Arc<dyn GenerationLogRepository>,
    pub generation_settings: GenerationSettings,
    pub generation_limits: GenerationLimits,
    pub failures: FailureResponder,
}

impl AppState {
    /// State for the bearer token middleware.
    pub fn auth_state(&self) -> AuthState {
        AuthState::new(self.session_validator.clone(), self.failures.clone())
    }

    // Auth

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.tokens.clone(),
        )
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.tokens.clone(), self.token_blacklist.clone())
    }

    pub fn refresh_access_handler(&self) -> RefreshAccessHandler {
        RefreshAccessHandler::new(self.tokens.clone(), self.token_blacklist.clone())
    }

    // Users

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn create_user_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }

    pub fn update_user_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn deactivate_user_handler(&self) -> DeactivateUserHandler {
        DeactivateUserHandler::new(self.users.clone())
    }

    // Generation

    pub fn generate_content_handler(&self) -> GenerateContentHandler {
        GenerateContentHandler::new(
            self.ai_provider.clone(),
            self.generation_logs.clone(),
            self.generation_settings.clone(),
        )
    }
}
