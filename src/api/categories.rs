//! Category routes
//!
//! `GET /categories?type=`, `POST /categories` and `DELETE /categories/{id}`.
//! Deleting a category leaves its transactions untouched.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;

use super::{parse_id, AppState, ApiError, ApiResult, CreatedResponse, MessageResponse};
use crate::models::{Category, CategoryId, TransactionType};
use crate::services::{CategoryService, CreateCategoryInput};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Category>>> {
    let Query(query) = query?;
    let kind = match query.kind.as_deref().filter(|s| !s.is_empty()) {
        Some(kind) => Some(
            kind.parse::<TransactionType>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        ),
        None => None,
    };

    let categories = CategoryService::new(&state.storage).list(kind)?;
    Ok(Json(categories))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateCategoryInput>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let Json(input) = payload?;
    let category = CategoryService::new(&state.storage).create(input)?;
    Ok(Json(CreatedResponse {
        id: category.id.value(),
        message: "Category added successfully",
    }))
}

async fn delete_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    let id: CategoryId = parse_id(&id, "category")?;
    CategoryService::new(&state.storage).delete(id)?;
    Ok(MessageResponse::new("Category deleted successfully"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
}
