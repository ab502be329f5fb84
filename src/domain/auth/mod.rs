//! Authentication domain: credentials, token claims and failure kinds.

mod errors;
mod requests;
mod tokens;

pub use errors::AuthError;
pub use requests::{LoginRequest, RefreshTokenRequest, PASSWORD_MAX_LENGTH, USERNAME_MAX_LENGTH};
pub use tokens::{IssuedToken, TokenClaims, TokenKind, TokenPair};

/// Client-facing authentication messages.
pub mod messages {
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
    pub const INACTIVE_USER: &str = "User account is inactive.";
    pub const INVALID_TOKEN: &str = "The provided token is invalid or has expired.";
    pub const CREDENTIALS_NOT_PROVIDED: &str = "Authentication credentials were not provided.";
    pub const LOGOUT_SUCCESS: &str = "Refresh token blacklisted successfully.";
}
