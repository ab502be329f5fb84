//! User repository port.
//!
//! Persists user accounts. Usernames are unique; implementations report a
//! clash as [`UserRepositoryError::UsernameTaken`] instead of a generic
//! database failure.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::user::{NewUser, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRepositoryError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account and returns it with its assigned id.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_username(&self, username: &str)
        -> Result<Option<User>, UserRepositoryError>;

    /// Non-superuser accounts ordered by id.
    async fn list_regular(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Overwrites every mutable column of an existing account.
    ///
    /// Returns `Ok(None)` if no account has `user.id`.
    async fn update(&self, user: &User) -> Result<Option<User>, UserRepositoryError>;
}
