//! HR Assist - HR content generation backend.
//!
//! JWT authentication, user management with soft delete, and one endpoint
//! that forwards a structured prompt to a chat completion API. Every failure
//! is translated into a fixed HTTP status and message per endpoint.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
