//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, the authenticated caller, and the field-level
//! validation vocabulary used by every request schema.

mod auth;
mod errors;
mod ids;
mod timestamp;
pub mod validation;

pub use auth::AuthenticatedUser;
pub use errors::{FieldErrors, NON_FIELD_ERRORS};
pub use ids::UserId;
pub use timestamp::Timestamp;
pub use validation::{Payload, StringRules};
