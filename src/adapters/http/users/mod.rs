//! HTTP adapter for user management endpoints.
//!
//! - `GET /users` - List regular accounts
//! - `POST /users` - Create an account
//! - `GET /users/{id}` - Show one account
//! - `PUT /users/{id}` - Replace username, email and password
//! - `DELETE /users/{id}` - Deactivate an account

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::users_router;
