//! HR content generation domain.
//!
//! A validated [`GenerationSpec`] is rendered into a two-message prompt, sent
//! to the completion provider once, and every success is kept as a
//! [`ContentGenerationLog`].

mod errors;
mod log;
pub mod prompt;
mod requests;

pub use errors::GenerationError;
pub use log::{ContentGenerationLog, GeneratedContent, GenerationSettings};
pub use requests::GenerationSpec;

pub mod messages {
    pub const FAILED_DEPENDENCY: &str =
        "Failed to generate content due to an external dependency error.";
}
