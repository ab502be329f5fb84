//! Content generation handlers.

mod generate_content;

pub use generate_content::{GenerateContentCommand, GenerateContentHandler};
