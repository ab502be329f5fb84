//! User management handlers.
//!
//! ## Commands
//! - Create, update and deactivate accounts
//!
//! ## Queries
//! - Get one account, list regular accounts

mod create_user;
mod deactivate_user;
mod get_user;
mod list_users;
mod update_user;

pub use create_user::CreateUserHandler;
pub use deactivate_user::DeactivateUserHandler;
pub use get_user::GetUserHandler;
pub use list_users::ListUsersHandler;
pub use update_user::UpdateUserHandler;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

/// Loads an account that may be modified: valid id, existing, not a superuser.
async fn load_mutable_user(users: &dyn UserRepository, user_id: UserId) -> Result<User, UserError> {
    if !user_id.is_valid() {
        return Err(UserError::InvalidUserId(user_id));
    }
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or(UserError::NotFound(user_id))?;
    if user.is_superuser {
        return Err(UserError::Protected(user_id));
    }
    Ok(user)
}
