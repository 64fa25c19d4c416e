use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use cookie::Cookie;

use bookshelf_auth::{TokenCodec, validate_claims};

use crate::app::errors::ApiError;
use crate::context::UserContext;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

#[derive(Clone)]
pub struct AuthState {
    pub codec: Arc<dyn TokenCodec>,
}

/// Reject requests without a verifiable token; attach the verified identity
/// to request extensions otherwise.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = token_from_cookies(req.headers()).ok_or(ApiError::Unauthorized)?;

    let claims = state.codec.decode(&token).map_err(|e| {
        tracing::debug!(error = %e, "token verification failed");
        ApiError::Unauthorized
    })?;

    // Signature checking does not cover the full time window (e.g. a future
    // iat), so the claims are validated separately.
    validate_claims(&claims, Utc::now()).map_err(|e| {
        tracing::debug!(error = %e, "token claims rejected");
        ApiError::Unauthorized
    })?;

    req.extensions_mut().insert(UserContext::new(claims.email));

    Ok(next.run(req).await)
}

fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for cookie in Cookie::split_parse(raw).flatten() {
            if cookie.name() == TOKEN_COOKIE {
                return Some(cookie.value().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_the_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; token=abc.def.ghi; lang=en"),
        );
        assert_eq!(token_from_cookies(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn absent_cookie_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(token_from_cookies(&headers), None);
        assert_eq!(token_from_cookies(&HeaderMap::new()), None);
    }
}
