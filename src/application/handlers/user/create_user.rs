//! CreateUserHandler - Registers a new regular account.

use std::sync::Arc;

use crate::domain::user::{NewUser, User, UserData, UserError};
use crate::ports::{PasswordHasher, UserRepository};

pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// New accounts are active and never privileged.
    pub async fn handle(&self, data: UserData) -> Result<User, UserError> {
        let password_hash = self.hasher.hash(&data.password).await?;

        let user = self
            .users
            .create(NewUser {
                username: data.username,
                email: data.email,
                password_hash,
                is_active: true,
                is_superuser: false,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user)
    }
}
