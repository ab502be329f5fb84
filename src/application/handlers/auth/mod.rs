//! Authentication handlers.
//!
//! ## Commands
//! - Login with username and password
//! - Logout (refresh token revocation)
//! - Access token refresh

mod login;
mod logout;
mod refresh_access;

pub use login::LoginHandler;
pub use logout::LogoutHandler;
pub use refresh_access::RefreshAccessHandler;

use crate::domain::auth::{AuthError, TokenClaims, TokenKind};
use crate::domain::foundation::UserId;
use crate::ports::{TokenBlacklist, TokenService};

/// Decodes a refresh token and rejects it if revoked.
async fn verify_refresh_token(
    tokens: &dyn TokenService,
    blacklist: &dyn TokenBlacklist,
    token: &str,
) -> Result<(UserId, TokenClaims), AuthError> {
    let claims = tokens.decode(token, TokenKind::Refresh)?;
    let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;

    if blacklist.is_revoked(claims.jti).await? {
        return Err(AuthError::InvalidToken);
    }
    Ok((user_id, claims))
}
