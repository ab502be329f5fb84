//! HTTP adapter for authentication endpoints.
//!
//! - `POST /auth/login` - Exchange credentials for an access/refresh pair
//! - `POST /auth/logout` - Blacklist a refresh token
//! - `POST /auth/refresh` - Issue a new access token from a refresh token

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::auth_router;
