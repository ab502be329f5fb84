//! UpdateUserHandler - Full replacement of a regular account.

use std::sync::Arc;

use super::load_mutable_user;
use crate::domain::foundation::UserId;
use crate::domain::user::{UpdateUserData, User, UserError};
use crate::ports::{PasswordHasher, UserRepository};

pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Checks that `user_id` names an existing, non-privileged account.
    ///
    /// Run before payload validation so a protected account is refused
    /// whatever the request body holds.
    pub async fn ensure_mutable(&self, user_id: UserId) -> Result<(), UserError> {
        load_mutable_user(self.users.as_ref(), user_id).await.map(|_| ())
    }

    /// Replaces username, email and password. The password is always rehashed.
    pub async fn handle(&self, cmd: UpdateUserData) -> Result<User, UserError> {
        let mut user = load_mutable_user(self.users.as_ref(), cmd.user_id).await?;

        user.username = cmd.data.username;
        user.email = cmd.data.email;
        user.password_hash = self.hasher.hash(&cmd.data.password).await?;

        let updated = self
            .users
            .update(&user)
            .await?
            .ok_or(UserError::NotFound(cmd.user_id))?;

        tracing::info!(user_id = %updated.id, "user updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::BcryptPasswordHasher;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::user::{NewUser, UserData};

    async fn seeded() -> (UpdateUserHandler, Arc<InMemoryUserRepository>, User, User) {
        let users = Arc::new(InMemoryUserRepository::new());
        let mut created = Vec::new();
        for (username, is_superuser) in [("admin", true), ("hugo", false), ("iris", false)] {
            created.push(
                users
                    .create(NewUser {
                        username: username.to_string(),
                        email: format!("{username}@example.com"),
                        password_hash: "old-hash".to_string(),
                        is_active: true,
                        is_superuser,
                    })
                    .await
                    .unwrap(),
            );
        }
        let handler = UpdateUserHandler::new(users.clone(), Arc::new(BcryptPasswordHasher::new(4)));
        (handler, users, created[0].clone(), created[1].clone())
    }

    fn replacement(user_id: UserId, username: &str) -> UpdateUserData {
        UpdateUserData::new(
            user_id,
            UserData {
                username: username.to_string(),
                email: "novo@example.com".to_string(),
                password: "N0vo$enha".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn replaces_every_field() {
        let (handler, users, _, hugo) = seeded().await;

        let updated = handler.handle(replacement(hugo.id, "hugo2")).await.unwrap();

        assert_eq!(updated.username, "hugo2");
        assert_eq!(updated.email, "novo@example.com");
        assert_ne!(updated.password_hash, "old-hash");
        let stored = users.find_by_id(hugo.id).await.unwrap().unwrap();
        assert_eq!(stored.username, "hugo2");
    }

    #[tokio::test]
    async fn superuser_is_protected() {
        let (handler, _, admin, _) = seeded().await;

        assert_eq!(
            handler.ensure_mutable(admin.id).await,
            Err(UserError::Protected(admin.id))
        );
        assert_eq!(
            handler.handle(replacement(admin.id, "x-admin")).await,
            Err(UserError::Protected(admin.id))
        );
    }

    #[tokio::test]
    async fn taking_another_username_conflicts() {
        let (handler, _, _, hugo) = seeded().await;
        assert_eq!(
            handler.handle(replacement(hugo.id, "iris")).await,
            Err(UserError::UsernameTaken("iris".to_string()))
        );
    }

    #[tokio::test]
    async fn guards_run_in_order() {
        let (handler, _, _, _) = seeded().await;
        assert_eq!(
            handler.ensure_mutable(UserId::new(0)).await,
            Err(UserError::InvalidUserId(UserId::new(0)))
        );
        assert_eq!(
            handler.ensure_mutable(UserId::new(50)).await,
            Err(UserError::NotFound(UserId::new(50)))
        );
    }
}
