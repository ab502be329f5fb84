//! Authentication error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidCredentials | 401 |
//! | InactiveUser | 403 |
//! | InvalidToken | 401 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::ports::{PasswordHashError, RepositoryError, TokenError, UserRepositoryError};

/// Failures of the login, logout and refresh operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The credentials matched a disabled account.
    #[error("user account is inactive")]
    InactiveUser,

    /// Token signature, expiry, type or revocation check failed.
    #[error("token is invalid or expired")]
    InvalidToken,

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl AuthError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AuthError::Infrastructure(message.into())
    }
}

impl From<UserRepositoryError> for AuthError {
    fn from(err: UserRepositoryError) -> Self {
        AuthError::Infrastructure(err.to_string())
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        AuthError::Infrastructure(err.to_string())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Infrastructure(err.to_string())
    }
}

/// Encoding failures are ours; every other token failure is the client's.
impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(message) => AuthError::Infrastructure(message),
            TokenError::Expired | TokenError::WrongKind { .. } | TokenError::Malformed(_) => {
                AuthError::InvalidToken
            }
        }
    }
}
