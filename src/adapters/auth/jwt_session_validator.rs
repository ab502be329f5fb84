//! Bearer token validation against the account store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::{AuthError, TokenKind};
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{SessionValidator, TokenService, UserRepository};

/// Resolves access tokens issued by a [`TokenService`] to live accounts.
pub struct JwtSessionValidator {
    tokens: Arc<dyn TokenService>,
    users: Arc<dyn UserRepository>,
}

impl JwtSessionValidator {
    pub fn new(tokens: Arc<dyn TokenService>, users: Arc<dyn UserRepository>) -> Self {
        Self { tokens, users }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.tokens.decode(token, TokenKind::Access).map_err(|e| {
            tracing::debug!(error = %e, "access token rejected");
            AuthError::InvalidToken
        })?;
        let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| AuthError::infrastructure(e.to_string()))?
            .filter(|user| user.is_active)
            .ok_or(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(
            user.id,
            user.username,
            user.is_superuser,
        ))
    }
}
