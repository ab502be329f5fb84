//! RefreshAccessHandler - Issues a new access token from a live refresh token.

use std::sync::Arc;

use super::verify_refresh_token;
use crate::domain::auth::{AuthError, RefreshTokenRequest, TokenKind};
use crate::ports::{TokenBlacklist, TokenService};

pub struct RefreshAccessHandler {
    tokens: Arc<dyn TokenService>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl RefreshAccessHandler {
    pub fn new(tokens: Arc<dyn TokenService>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { tokens, blacklist }
    }

    /// Returns the new access token. The refresh token stays usable.
    pub async fn handle(&self, request: RefreshTokenRequest) -> Result<String, AuthError> {
        let (user_id, _) =
            verify_refresh_token(self.tokens.as_ref(), self.blacklist.as_ref(), &request.refresh_token)
                .await?;

        let access = self.tokens.issue(user_id, TokenKind::Access)?;
        Ok(access.token)
    }
}
