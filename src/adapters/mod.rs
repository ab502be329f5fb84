//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion providers (OpenAI, mock)
//! - `auth` - JWT tokens, bcrypt hashing and bearer session validation
//! - `http` - axum routers, extractors and failure translation
//! - `memory` - In-memory stores for tests and database-less runs
//! - `postgres` - sqlx-backed stores

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
