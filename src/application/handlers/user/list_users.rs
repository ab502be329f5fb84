use std::sync::Arc;

use crate::domain::user::{UserError, UserProfile};
use crate::ports::UserRepository;

/// Query handler listing every regular account, ordered by id.
pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<UserProfile>, UserError> {
        let users = self.users.list_regular().await?;
        Ok(users.iter().map(|user| user.profile()).collect())
    }
}
