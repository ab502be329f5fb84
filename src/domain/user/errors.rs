//! User management error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidUserId | 400 |
//! | Protected | 403 |
//! | NotFound | 404 |
//! | UsernameTaken | 409 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::ports::{PasswordHashError, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Ids must be strictly positive.
    #[error("user id must be greater than zero, got {0}")]
    InvalidUserId(UserId),

    #[error("user {0} not found")]
    NotFound(UserId),

    /// Superuser accounts cannot be updated or deactivated.
    #[error("user {0} is a protected account")]
    Protected(UserId),

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }
}

impl From<UserRepositoryError> for UserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UsernameTaken(username) => UserError::UsernameTaken(username),
            UserRepositoryError::Database(message) => UserError::Infrastructure(message),
        }
    }
}

impl From<PasswordHashError> for UserError {
    fn from(err: PasswordHashError) -> Self {
        UserError::Infrastructure(err.to_string())
    }
}
