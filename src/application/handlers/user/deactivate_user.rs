//! DeactivateUserHandler - Soft delete.

use std::sync::Arc;

use super::load_mutable_user;
use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

pub struct DeactivateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DeactivateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Clears `is_active`; the row is kept. Deactivating twice succeeds.
    pub async fn handle(&self, user_id: UserId) -> Result<User, UserError> {
        let mut user = load_mutable_user(self.users.as_ref(), user_id).await?;
        user.is_active = false;

        let updated = self
            .users
            .update(&user)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        tracing::info!(user_id = %user_id, "user deactivated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::user::NewUser;

    async fn create(users: &InMemoryUserRepository, username: &str, is_superuser: bool) -> User {
        users
            .create(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash: "hash".to_string(),
                is_active: true,
                is_superuser,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn deactivation_keeps_the_account() {
        let users = Arc::new(InMemoryUserRepository::new());
        let user = create(&users, "joao", false).await;

        DeactivateUserHandler::new(users.clone())
            .handle(user.id)
            .await
            .unwrap();

        let stored = users.find_by_id(user.id).await.unwrap().unwrap();
        assert!(!stored.is_active);
        assert_eq!(users.len().await, 1);
    }

    #[tokio::test]
    async fn superuser_cannot_be_deactivated() {
        let users = Arc::new(InMemoryUserRepository::new());
        let admin = create(&users, "admin", true).await;

        assert_eq!(
            DeactivateUserHandler::new(users).handle(admin.id).await,
            Err(UserError::Protected(admin.id))
        );
    }
}
