//! Validated authentication requests.

use serde_json::Value;

use crate::domain::foundation::{FieldErrors, Payload, StringRules};

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Username/password pair submitted to login.
///
/// No minimum lengths apply here; those are enforced when accounts are created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_payload(raw: &Value) -> Result<Self, FieldErrors> {
        let mut payload = Payload::new(raw);
        let username = payload.string("username", StringRules::new().max(USERNAME_MAX_LENGTH));
        let password = payload.string("password", StringRules::new().max(PASSWORD_MAX_LENGTH));
        payload.finish(move || {
            Some(Self {
                username: username?,
                password: password?,
            })
        })
    }
}

/// Refresh token submitted to logout or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

impl RefreshTokenRequest {
    pub fn from_payload(raw: &Value) -> Result<Self, FieldErrors> {
        let mut payload = Payload::new(raw);
        let refresh_token = payload.string("refresh_token", StringRules::new());
        payload.finish(move || {
            Some(Self {
                refresh_token: refresh_token?,
            })
        })
    }
}
