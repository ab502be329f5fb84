//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod diagnostic_logger;
pub mod handlers;

pub use diagnostic_logger::DiagnosticLogger;
