//! Centralized error → response mapping.
//!
//! Every handler returns `Result<_, ApiError>`; this is the single place
//! where failures become HTTP statuses and JSON bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use bookshelf_auth::TokenError;
use bookshelf_core::DomainError;
use bookshelf_store::StoreError;

use crate::authz::OwnershipError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unverifiable token on a protected route.
    #[error("unauthorized access")]
    Unauthorized,

    /// Verified identity does not own the requested data.
    #[error("forbidden access")]
    Forbidden,

    /// Malformed identifier or payload.
    #[error("{0}")]
    BadRequest(String),

    /// The store failed; not retried.
    #[error("upstream store failure")]
    Upstream(#[source] StoreError),

    /// Unexpected internal failure (e.g. token encoding).
    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized",
            ApiError::Forbidden => "forbidden",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Upstream(_) => "upstream_failure",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::Upstream(source) => {
                tracing::error!(error = %source, "store operation failed");
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal failure");
            }
            _ => {}
        }
        json_error(self.status(), self.code(), self.to_string())
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Upstream(e)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<OwnershipError> for ApiError {
    fn from(_: OwnershipError) -> Self {
        ApiError::Forbidden
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired | TokenError::Invalid => ApiError::Unauthorized,
            TokenError::Encode(msg) => ApiError::Internal(msg),
        }
    }
}
