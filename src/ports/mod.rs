//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Identity Ports
//!
//! - `UserRepository` - Account persistence
//! - `PasswordHasher` - One-way password hashing
//! - `TokenService` - Signed token issue and decode
//! - `TokenBlacklist` - Revoked refresh tokens
//! - `SessionValidator` - Bearer token to authenticated user
//!
//! ## Generation Ports
//!
//! - `AIProvider` - Chat completion API
//! - `GenerationLogRepository` - Audit trail of generations
//!
//! ## Diagnostics
//!
//! - `DiagnosticLogRepository` - Records of unexpected failures

mod ai_provider;
mod diagnostic_log_repository;
mod generation_log_repository;
mod password_hasher;
mod session_validator;
mod token_blacklist;
mod token_service;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole, TokenUsage,
};
pub use diagnostic_log_repository::DiagnosticLogRepository;
pub use generation_log_repository::GenerationLogRepository;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use session_validator::SessionValidator;
pub use token_blacklist::TokenBlacklist;
pub use token_service::{TokenError, TokenService};
pub use user_repository::{UserRepository, UserRepositoryError};

use thiserror::Error;

/// Failure of a plain persistence port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(String),
}

impl RepositoryError {
    pub fn database(message: impl Into<String>) -> Self {
        RepositoryError::Database(message.into())
    }
}
