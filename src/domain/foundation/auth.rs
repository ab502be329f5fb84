//! Identity of the caller behind an authenticated request.

use super::UserId;

/// User resolved from a valid access token.
///
/// Handlers receive this through request extensions; it is never built from
/// client-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub is_superuser: bool,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: impl Into<String>, is_superuser: bool) -> Self {
        Self {
            id,
            username: username.into(),
            is_superuser,
        }
    }
}
