//! In-memory adapters for tests and database-less runs.
//!
//! Stores that can be switched into a failing mode expose `set_failing`.

mod diagnostic_log_repository;
mod generation_log_repository;
mod token_blacklist;
mod user_repository;

pub use diagnostic_log_repository::InMemoryDiagnosticLogRepository;
pub use generation_log_repository::InMemoryGenerationLogRepository;
pub use token_blacklist::InMemoryTokenBlacklist;
pub use user_repository::InMemoryUserRepository;
