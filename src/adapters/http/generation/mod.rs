//! HTTP adapter for content generation.
//!
//! - `POST /generation` - Generate HR content from a structured prompt

pub mod handlers;
pub mod routes;

pub use routes::generation_router;
