use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{UserError, UserProfile};
use crate::ports::UserRepository;

/// Query handler for a single account, active or not.
pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<UserProfile, UserError> {
        if !user_id.is_valid() {
            return Err(UserError::InvalidUserId(user_id));
        }

        self.users
            .find_by_id(user_id)
            .await?
            .map(|user| user.profile())
            .ok_or(UserError::NotFound(user_id))
    }
}
