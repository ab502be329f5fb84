//! Authentication adapters.
//!
//! Implementations of the identity ports:
//!
//! - `JwtTokenService` - HS256 access and refresh tokens
//! - `BcryptPasswordHasher` - bcrypt password hashing
//! - `JwtSessionValidator` - bearer token to active account

mod bcrypt_hasher;
mod jwt_session_validator;
mod jwt_token_service;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use jwt_session_validator::JwtSessionValidator;
pub use jwt_token_service::JwtTokenService;
