use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime in seconds (fixed one-hour expiry).
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Identity claims carried by a session token (transport-agnostic).
///
/// This is the minimal claim set the service expects once a token has been
/// decoded and its signature verified. `iat`/`exp` are Unix timestamps, the
/// registered-claim names `jsonwebtoken` validates against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Claimed identity (email). Trusted only after signature verification.
    pub email: String,

    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Claims for `email` issued at `now`, expiring after the fixed TTL.
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_ttl(email, now, Duration::seconds(TOKEN_TTL_SECS))
    }

    pub fn with_ttl(email: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            email: email.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate token claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// lives in [`crate::token`].
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now.timestamp() < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now.timestamp() >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).expect("valid timestamp")
    }

    #[test]
    fn accepts_claims_inside_the_window() {
        let claims = Claims::new("a@x.com", at(1_000));
        assert_eq!(validate_claims(&claims, at(1_500)), Ok(()));
    }

    #[test]
    fn rejects_expired_claims() {
        let claims = Claims::new("a@x.com", at(1_000));
        assert_eq!(
            validate_claims(&claims, at(1_000 + TOKEN_TTL_SECS)),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn rejects_claims_issued_in_the_future() {
        let claims = Claims::new("a@x.com", at(2_000));
        assert_eq!(
            validate_claims(&claims, at(1_999)),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn rejects_inverted_time_window() {
        let claims = Claims::with_ttl("a@x.com", at(1_000), Duration::seconds(0));
        assert_eq!(
            validate_claims(&claims, at(1_000)),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
