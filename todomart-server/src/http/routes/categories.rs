//! Category endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::db::repos::{Category, CategoryRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;

/// GET /categories - every category
pub(super) async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(categories))
}

/// GET /category/{id}
pub(super) async fn get_category(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Category>, ApiError> {
    let category = CategoryRepo::new(&state.pool).get(id).await?;
    Ok(Json(category))
}
