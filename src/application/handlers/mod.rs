//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod auth;
pub mod generation;
pub mod user;

pub use auth::{LoginHandler, LogoutHandler, RefreshAccessHandler};
pub use generation::{GenerateContentCommand, GenerateContentHandler};
pub use user::{
    CreateUserHandler, DeactivateUserHandler, GetUserHandler, ListUsersHandler, UpdateUserHandler,
};
