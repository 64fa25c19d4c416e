use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use bookshelf_core::{CartDraft, CartEntry, RecordId};
use bookshelf_store::{DeleteReport, UpdateReport};

use crate::app::dto::{CartQuery, QuantityPatch};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::authz;
use crate::context::UserContext;

pub async fn add_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Json(draft): Json<CartDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = services.cart.insert_entry(draft).await?;
    tracing::info!(entry_id = %entry.id, email = %entry.email, "cart entry added");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// A user may only list their own cart; the query email must match the
/// verified token identity.
pub async fn list_entries(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Vec<CartEntry>>, ApiError> {
    authz::require_owner(&user, &query.email)?;
    Ok(Json(services.cart.entries_by_email(&query.email).await?))
}

/// The path segment is an entry id here.
pub async fn remove_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Path(key): Path<String>,
) -> Result<Json<DeleteReport>, ApiError> {
    let id: RecordId = key.parse()?;
    Ok(Json(services.cart.delete_entry(id).await?))
}

/// The path segment is a book name here. Quantity patches upsert: a name
/// with no entry gets a minimal one created.
pub async fn set_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Path(key): Path<String>,
    Json(patch): Json<QuantityPatch>,
) -> Result<Json<UpdateReport>, ApiError> {
    Ok(Json(
        services.cart.upsert_entry_quantity(&key, patch.quantity).await?,
    ))
}
