//! Token service port.
//!
//! Issues and decodes signed access and refresh tokens. Decoding checks the
//! signature, the expiry and the token kind; revocation is the business of
//! [`TokenBlacklist`](super::TokenBlacklist).

use thiserror::Error;

use crate::domain::auth::{IssuedToken, TokenClaims, TokenKind};
use crate::domain::foundation::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("expected a {expected:?} token")]
    WrongKind { expected: TokenKind },

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("token encoding failed: {0}")]
    Encoding(String),
}

pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: UserId, kind: TokenKind) -> Result<IssuedToken, TokenError>;

    fn decode(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, TokenError>;
}
