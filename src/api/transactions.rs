//! Transaction routes
//!
//! Listing accepts `type`, `month` and `limit` query parameters; the limit
//! falls back to the configured page size.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;

use super::{parse_id, AppState, ApiError, ApiResult, CreatedResponse, MessageResponse};
use crate::models::{Month, TransactionId, TransactionType};
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, TransactionWithCategory,
};

#[derive(Debug, Default, Deserialize)]
pub struct TransactionQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
    month: Option<String>,
    limit: Option<usize>,
}

impl TransactionQuery {
    fn into_filter(self, default_limit: usize) -> ApiResult<TransactionFilter> {
        let mut filter = TransactionFilter::new().limit(self.limit.unwrap_or(default_limit));

        if let Some(kind) = self.kind.as_deref().filter(|s| !s.is_empty()) {
            let kind = kind
                .parse::<TransactionType>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            filter = filter.kind(kind);
        }

        if let Some(month) = self.month.as_deref().filter(|s| !s.is_empty()) {
            let month = month
                .parse::<Month>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            filter = filter.month(month);
        }

        Ok(filter)
    }
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TransactionWithCategory>>> {
    let Query(query) = query?;
    let filter = query.into_filter(state.settings.transaction_list_limit)?;
    let transactions = TransactionService::new(&state.storage).list(filter)?;
    Ok(Json(transactions))
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTransactionInput>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let Json(input) = payload?;
    let txn = TransactionService::new(&state.storage).create(input)?;
    Ok(Json(CreatedResponse {
        id: txn.id.value(),
        message: "Transaction added successfully",
    }))
}

async fn delete_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    let id: TransactionId = parse_id(&id, "transaction")?;
    TransactionService::new(&state.storage).delete(id)?;
    Ok(MessageResponse::new("Transaction deleted successfully"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/{id}", delete(delete_transaction))
}
