//! Session validation port for bearer token authentication.
//!
//! HTTP middleware uses this to turn an `Authorization: Bearer` token into
//! the [`AuthenticatedUser`] making the request.

use async_trait::async_trait;

use crate::domain::auth::AuthError;
use crate::domain::foundation::AuthenticatedUser;

/// Validates access tokens and resolves the account behind them.
///
/// # Contract
///
/// Implementations must:
/// - Validate the signature, expiry and token kind
/// - Reject tokens whose account is missing or inactive
/// - Return `AuthError::InvalidToken` for all of the above
/// - Return `AuthError::Infrastructure` when the account store fails
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw JWT, without the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
