//! HS256 JWT implementation of the `TokenService` port.
//!
//! Access and refresh tokens share one signing secret and are told apart by
//! the `token_type` claim. Expiry is checked without leeway.

use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;

use crate::config::AuthConfig;
use crate::domain::auth::{IssuedToken, TokenClaims, TokenKind};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{TokenError, TokenService};

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
}

impl JwtTokenService {
    pub fn new(secret: &[u8], access_ttl_secs: u64, refresh_ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.expose_secret().as_bytes(),
            config.access_token_ttl_secs,
            config.refresh_token_ttl_secs,
        )
    }

    fn ttl(&self, kind: TokenKind) -> u64 {
        match kind {
            TokenKind::Access => self.access_ttl_secs,
            TokenKind::Refresh => self.refresh_ttl_secs,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: UserId, kind: TokenKind) -> Result<IssuedToken, TokenError> {
        let claims = TokenClaims::new(user_id, kind, Timestamp::now(), self.ttl(kind));
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;
        Ok(IssuedToken { token, claims })
    }

    fn decode(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        if data.claims.token_type != expected {
            return Err(TokenError::WrongKind { expected });
        }
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"a-test-secret-that-is-long-enough!";

    fn service() -> JwtTokenService {
        JwtTokenService::new(SECRET, 300, 86_400)
    }

    #[test]
    fn issued_token_decodes_to_same_claims() {
        let service = service();
        let issued = service.issue(UserId::new(9), TokenKind::Refresh).unwrap();

        let claims = service.decode(&issued.token, TokenKind::Refresh).unwrap();

        assert_eq!(claims, issued.claims);
        assert_eq!(claims.user_id(), Some(UserId::new(9)));
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn access_token_is_not_a_refresh_token() {
        let service = service();
        let issued = service.issue(UserId::new(9), TokenKind::Access).unwrap();

        assert_eq!(
            service.decode(&issued.token, TokenKind::Refresh),
            Err(TokenError::WrongKind {
                expected: TokenKind::Refresh
            })
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued_at = Timestamp::from_unix_secs(Timestamp::now().as_unix_secs() - 600).unwrap();
        let claims = TokenClaims::new(UserId::new(1), TokenKind::Refresh, issued_at, 60);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(
            service().decode(&token, TokenKind::Refresh),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn token_signed_with_other_secret_is_malformed() {
        let other = JwtTokenService::new(b"another-secret-of-sufficient-size", 300, 600);
        let issued = other.issue(UserId::new(1), TokenKind::Access).unwrap();

        assert!(matches!(
            service().decode(&issued.token, TokenKind::Access),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn each_token_gets_a_fresh_jti() {
        let service = service();
        let a = service.issue(UserId::new(1), TokenKind::Access).unwrap();
        let b = service.issue(UserId::new(1), TokenKind::Access).unwrap();
        assert_ne!(a.claims.jti, b.claims.jti);
        assert_ne!(a.token, b.token);
    }
}
