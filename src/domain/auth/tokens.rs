//! Signed token vocabulary: claims, kinds and issued pairs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, UserId};

/// Purpose a token was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by every access and refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id, as a decimal string.
    pub sub: String,
    /// Unique token id; the blacklist is keyed by it.
    pub jti: Uuid,
    pub token_type: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(user_id: UserId, kind: TokenKind, issued_at: Timestamp, ttl_secs: u64) -> Self {
        Self {
            sub: user_id.to_string(),
            jti: Uuid::new_v4(),
            token_type: kind,
            iat: issued_at.as_unix_secs(),
            exp: issued_at.plus_secs(ttl_secs).as_unix_secs(),
        }
    }

    /// Subject parsed back into a user id, `None` when malformed.
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }

    pub fn expires_at(&self) -> Option<Timestamp> {
        Timestamp::from_unix_secs(self.exp)
    }
}

/// A signed token together with the claims it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
