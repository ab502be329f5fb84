//! User account entity and its public projection.

use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId};

/// Stored user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    /// Privileged accounts cannot be modified or deactivated through the API.
    pub is_superuser: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    pub fn status(&self) -> UserStatus {
        if self.is_active {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            status: self.status(),
        }
    }
}

/// Fields for a user that does not exist yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Public view of an account, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(is_active: bool) -> User {
        User {
            id: UserId::new(3),
            username: "marta".to_string(),
            email: "marta@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            is_active,
            is_superuser: false,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn profile_hides_credentials() {
        let profile = serde_json::to_value(user(true).profile()).unwrap();
        assert_eq!(
            profile,
            json!({
                "id": 3,
                "username": "marta",
                "email": "marta@example.com",
                "status": "active"
            })
        );
    }

    #[test]
    fn inactive_user_reports_inactive_status() {
        assert_eq!(user(false).status(), UserStatus::Inactive);
    }
}
