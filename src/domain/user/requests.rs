//! Validated user creation and replacement requests.

use serde_json::Value;

use super::password_policy;
use crate::domain::foundation::{FieldErrors, Payload, StringRules, UserId};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 150;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Every field of an account, as submitted for create or full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserData {
    /// Validates all fields, collecting every violation.
    ///
    /// Password policy rules only run once the password length is acceptable.
    pub fn from_payload(raw: &Value) -> Result<Self, FieldErrors> {
        let mut payload = Payload::new(raw);
        let username = payload.string(
            "username",
            StringRules::new()
                .min(USERNAME_MIN_LENGTH)
                .max(USERNAME_MAX_LENGTH),
        );
        let email = payload.email("email");
        let password = payload.string(
            "password",
            StringRules::new()
                .min(PASSWORD_MIN_LENGTH)
                .max(PASSWORD_MAX_LENGTH),
        );
        let password = payload.check("password", password, password_policy::violations);

        payload.finish(move || {
            Some(Self {
                username: username?,
                email: email?,
                password: password?,
            })
        })
    }
}

/// Full replacement of an existing account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserData {
    pub user_id: UserId,
    pub data: UserData,
}

impl UpdateUserData {
    pub fn new(user_id: UserId, data: UserData) -> Self {
        Self { user_id, data }
    }
}
