//! Session token issuance and teardown.
//!
//! Trust-on-claim: `POST /jwt` signs whatever email the caller presents.
//! The token travels in an HTTP-only cookie so browser scripts never see it.

use std::sync::Arc;

use axum::http::header;
use axum::response::{AppendHeaders, IntoResponse};
use axum::{Extension, Json};
use chrono::Utc;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use bookshelf_auth::{Claims, TokenCodec};

use crate::app::dto::{AckResponse, IssueTokenRequest, IssueTokenResponse};
use crate::app::errors::ApiError;
use crate::middleware::TOKEN_COOKIE;

/// Signs claims and shapes the session cookie. Cross-site frontends need
/// `SameSite=None`, which browsers only accept over HTTPS, so the cookie
/// attributes follow the deployment mode.
pub struct TokenIssuer {
    codec: Arc<dyn TokenCodec>,
    production: bool,
}

impl TokenIssuer {
    pub fn new(codec: Arc<dyn TokenCodec>, production: bool) -> Self {
        Self { codec, production }
    }

    fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, token))
            .path("/")
            .http_only(true)
            .secure(self.production)
            .same_site(if self.production {
                SameSite::None
            } else {
                SameSite::Strict
            })
            .build()
    }

    fn expired_cookie(&self) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, ""))
            .path("/")
            .http_only(true)
            .secure(self.production)
            .max_age(Duration::ZERO)
            .build()
    }
}

pub async fn issue_token(
    Extension(issuer): Extension<Arc<TokenIssuer>>,
    Json(body): Json<IssueTokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.email.trim().is_empty() {
        return Err(ApiError::BadRequest("email must not be empty".to_string()));
    }

    let claims = Claims::new(body.email, Utc::now());
    tracing::debug!(email = %claims.email, "issuing session token");

    let token = issuer.codec.encode(&claims)?;
    let cookie = issuer.session_cookie(token.clone());

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie.to_string())]),
        Json(IssueTokenResponse {
            success: true,
            token,
        }),
    ))
}

pub async fn logout(Extension(issuer): Extension<Arc<TokenIssuer>>) -> impl IntoResponse {
    (
        AppendHeaders([(header::SET_COOKIE, issuer.expired_cookie().to_string())]),
        Json(AckResponse { success: true }),
    )
}
