//! HS256 token encoding/decoding.
//!
//! The codec sits behind a trait so HTTP middleware can hold an
//! `Arc<dyn TokenCodec>` without knowing the signing algorithm.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;

use crate::claims::Claims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("failed to encode token: {0}")]
    Encode(String),
}

/// Mint and verify signed identity tokens.
pub trait TokenCodec: Send + Sync {
    /// Sign `claims` into a compact token string.
    fn encode(&self, claims: &Claims) -> Result<String, TokenError>;

    /// Verify signature and expiry, returning the embedded claims.
    fn decode(&self, token: &str) -> Result<Claims, TokenError>;
}

/// HMAC-SHA256 codec keyed by the access-token secret.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry; the default 60s leeway would accept just-expired tokens.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenCodec for Hs256TokenCodec {
    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn codec() -> Hs256TokenCodec {
        Hs256TokenCodec::new(b"test-secret")
    }

    #[test]
    fn round_trips_claims() {
        let claims = Claims::new("a@x.com", Utc::now());
        let token = codec().encode(&claims).expect("encode");
        let decoded = codec().decode(&token).expect("decode");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn rejects_expired_tokens() {
        let claims = Claims::with_ttl("a@x.com", Utc::now() - Duration::hours(2), Duration::hours(1));
        let token = codec().encode(&claims).expect("encode");
        assert_eq!(codec().decode(&token), Err(TokenError::Expired));
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let claims = Claims::new("a@x.com", Utc::now());
        let token = Hs256TokenCodec::new(b"other-secret")
            .encode(&claims)
            .expect("encode");
        assert_eq!(codec().decode(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn rejects_tampered_tokens() {
        let claims = Claims::new("a@x.com", Utc::now());
        let mut token = codec().encode(&claims).expect("encode");
        token.push('x');
        assert_eq!(codec().decode(&token), Err(TokenError::Invalid));
    }
}
