use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use bookshelf_core::{Book, BookDraft, RecordId};
use bookshelf_store::UpdateReport;

use crate::app::dto::QuantityPatch;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn add_book(
    Extension(services): Extension<Arc<AppServices>>,
    Json(draft): Json<BookDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let book = services.catalog.insert_book(draft).await?;
    tracing::info!(book_id = %book.id, name = %book.name, "book added");
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn all_books(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(services.catalog.all_books().await?))
}

/// Single-book lookup. An unknown id is not an error: the body is `null`,
/// mirroring how a find-one returns an empty result.
pub async fn get_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Book>>, ApiError> {
    let id: RecordId = id.parse()?;
    Ok(Json(services.catalog.book_by_id(id).await?))
}

pub async fn books_by_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(services.catalog.books_by_category(&name).await?))
}

/// Full replacement of every mutable field. Zero matches still succeed;
/// the report tells the caller what happened.
pub async fn replace_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<UpdateReport>, ApiError> {
    let id: RecordId = id.parse()?;
    Ok(Json(services.catalog.replace_book(id, draft).await?))
}

/// Borrow/return adjustment: sets the quantity and nothing else.
pub async fn borrow_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(patch): Json<QuantityPatch>,
) -> Result<Json<UpdateReport>, ApiError> {
    let id: RecordId = id.parse()?;
    Ok(Json(
        services.catalog.set_book_quantity(id, patch.quantity).await?,
    ))
}
