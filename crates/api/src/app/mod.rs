//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring (in-memory or Postgres-backed)
//! - `routes/`: HTTP routes + handlers (one file per resource family)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use axum::{Extension, Router};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bookshelf_auth::{Hs256TokenCodec, TokenCodec};
use bookshelf_store::StoreError;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid frontend origin: {0}")]
    InvalidOrigin(String),
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub async fn build_app(cfg: &ApiConfig) -> Result<Router, BuildError> {
    let codec: Arc<dyn TokenCodec> = Arc::new(Hs256TokenCodec::new(cfg.token_secret.as_bytes()));
    let issuer = Arc::new(routes::auth::TokenIssuer::new(codec.clone(), cfg.production));
    let auth_state = middleware::AuthState { codec };

    let services = Arc::new(services::build_services(cfg).await?);

    let origin = cfg
        .frontend_origin
        .parse::<HeaderValue>()
        .map_err(|_| BuildError::InvalidOrigin(cfg.frontend_origin.clone()))?;

    // Credentialed CORS forbids wildcards, so everything is listed explicitly.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    // Protected routes: token verification happens before any handler runs.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Ok(routes::public_router()
        .merge(protected)
        .layer(Extension(services))
        .layer(Extension(issuer))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
}
