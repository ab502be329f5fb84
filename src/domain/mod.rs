//! Domain layer containing business rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, field validation)
//! - `auth` - Credentials, token claims and authentication failures
//! - `user` - Account management rules and password policy
//! - `generation` - Prompt construction and generation audit records
//! - `diagnostics` - Records of unexpected request failures

pub mod auth;
pub mod diagnostics;
pub mod foundation;
pub mod generation;
pub mod user;

/// Messages shared by every endpoint.
pub mod messages {
    pub const BAD_REQUEST: &str = "Bad request.";
    pub const INTERNAL_SERVER_ERROR: &str =
        "Internal server error occurred. Check the log_system table for more details.";
    pub const REQUEST_TIMEOUT: &str = "Request timed out.";
}
