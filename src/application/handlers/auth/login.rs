//! LoginHandler - Exchanges credentials for an access/refresh token pair.

use std::sync::Arc;

use crate::domain::auth::{AuthError, LoginRequest, TokenKind, TokenPair};
use crate::ports::{PasswordHasher, TokenService, UserRepository};

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, request: LoginRequest) -> Result<TokenPair, AuthError> {
        let Some(user) = self.users.find_by_username(&request.username).await? else {
            // Unknown usernames cost one hash, same as a verify.
            let _ = self.hasher.hash(&request.password).await;
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&request.password, &user.password_hash)
            .await?
        {
            return Err(AuthError::InvalidCredentials);
        }

        // Only reported once the password matched.
        if !user.is_active {
            return Err(AuthError::InactiveUser);
        }

        let access = self.tokens.issue(user.id, TokenKind::Access)?;
        let refresh = self.tokens.issue(user.id, TokenKind::Refresh)?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }
}
