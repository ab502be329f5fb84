//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Accounts (`users`)
//! - `PostgresTokenBlacklist` - Revoked refresh tokens (`token_blacklist`)
//! - `PostgresGenerationLogRepository` - Generation audit trail (`content_generation_logs`)
//! - `PostgresDiagnosticLogRepository` - Unexpected failures (`log_system`)

mod diagnostic_log_repository;
mod generation_log_repository;
mod token_blacklist;
mod user_repository;

pub use diagnostic_log_repository::PostgresDiagnosticLogRepository;
pub use generation_log_repository::PostgresGenerationLogRepository;
pub use token_blacklist::PostgresTokenBlacklist;
pub use user_repository::PostgresUserRepository;
