//! User management domain.
//!
//! Accounts are never removed: deactivation flips `is_active`. Superuser
//! accounts are read-only through the API.

mod errors;
pub mod password_policy;
mod requests;
#[allow(clippy::module_inception)]
mod user;

pub use errors::UserError;
pub use requests::{
    UpdateUserData, UserData, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, USERNAME_MAX_LENGTH,
    USERNAME_MIN_LENGTH,
};
pub use user::{NewUser, User, UserProfile, UserStatus};

/// Client-facing user management messages.
pub mod messages {
    pub const USER_NOT_FOUND: &str = "User not found.";
    pub const USER_CREATED: &str = "User created successfully.";
    pub const USER_UPDATED: &str = "User updated successfully.";
    pub const USER_DELETED: &str = "User set as inactive successfully.";
    pub const USERNAME_TAKEN: &str = "Username is already taken.";
    pub const USER_PROTECTED: &str = "Cannot update/delete superuser account.";
    pub const INVALID_USER_ID: &str = "Bad request. User ID must be greater than zero.";
}
