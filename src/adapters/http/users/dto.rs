//! Response bodies for the user management endpoints.

use serde::Serialize;

use crate::domain::user::{UserProfile, UserStatus};

/// Public view of an account.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub status: UserStatus,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.value(),
            username: profile.username,
            email: profile.email,
            status: profile.status,
        }
    }
}
