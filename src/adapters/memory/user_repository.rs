//! In-memory user repository.
//!
//! Ids are assigned sequentially from 1. Useful for tests and local runs
//! without a database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::{UserRepository, UserRepositoryError};

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<UserId, User>,
    next_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> Result<(), UserRepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(UserRepositoryError::Database(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

impl Store {
    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.username == username && Some(u.id) != except)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        self.check_available()?;
        let mut store = self.store.write().await;
        if store.username_taken(&user.username, None) {
            return Err(UserRepositoryError::UsernameTaken(user.username));
        }

        store.next_id += 1;
        let now = Timestamp::now();
        let created = User {
            id: UserId::new(store.next_id),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            created_at: now,
            updated_at: now,
        };
        store.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        self.check_available()?;
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        self.check_available()?;
        Ok(self
            .store
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_regular(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.check_available()?;
        Ok(self
            .store
            .read()
            .await
            .users
            .values()
            .filter(|u| !u.is_superuser)
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserRepositoryError> {
        self.check_available()?;
        let mut store = self.store.write().await;
        if !store.users.contains_key(&user.id) {
            return Ok(None);
        }
        if store.username_taken(&user.username, Some(user.id)) {
            return Err(UserRepositoryError::UsernameTaken(user.username.clone()));
        }

        let mut updated = user.clone();
        updated.updated_at = Timestamp::now();
        store.users.insert(updated.id, updated.clone());
        Ok(Some(updated))
    }
}
