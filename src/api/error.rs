//! HTTP error responses
//!
//! Maps [`MoneyFlowError`] and axum extractor rejections onto status codes
//! with an `{"error": message}` body.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::MoneyFlowError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] MoneyFlowError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                MoneyFlowError::Validation(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
                MoneyFlowError::NotFound { entity_type, .. } => {
                    (StatusCode::NOT_FOUND, format!("{} not found", entity_type))
                }
                MoneyFlowError::Duplicate { .. } => (StatusCode::CONFLICT, e.to_string()),
                _ => {
                    tracing::error!(error = %e, "Request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_bad_request_with_bare_message() {
        let (status, body) = render(MoneyFlowError::missing_fields().into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = render(MoneyFlowError::goal_not_found("goal-9").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Goal not found");
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let err = MoneyFlowError::Duplicate {
            entity_type: "Category",
            identifier: "Pets".into(),
        };
        let (status, _) = render(err.into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_storage_fault_is_server_error() {
        let (status, body) = render(MoneyFlowError::Storage("disk full".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Storage error: disk full");
    }
}
