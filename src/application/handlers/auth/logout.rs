//! LogoutHandler - Revokes a refresh token.
//!
//! Access tokens already issued stay valid until they expire.

use std::sync::Arc;

use super::verify_refresh_token;
use crate::domain::auth::{AuthError, RefreshTokenRequest};
use crate::ports::{TokenBlacklist, TokenService};

pub struct LogoutHandler {
    tokens: Arc<dyn TokenService>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutHandler {
    pub fn new(tokens: Arc<dyn TokenService>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { tokens, blacklist }
    }

    pub async fn handle(&self, request: RefreshTokenRequest) -> Result<(), AuthError> {
        let (user_id, claims) =
            verify_refresh_token(self.tokens.as_ref(), self.blacklist.as_ref(), &request.refresh_token)
                .await?;
        let expires_at = claims.expires_at().ok_or(AuthError::InvalidToken)?;

        self.blacklist.revoke(claims.jti, user_id, expires_at).await?;

        tracing::info!(user_id = %user_id, jti = %claims.jti, "refresh token blacklisted");
        Ok(())
    }
}
