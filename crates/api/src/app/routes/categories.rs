use std::sync::Arc;

use axum::{Extension, Json};

use bookshelf_core::Category;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(services.catalog.all_categories().await?))
}
