//! JSON HTTP API
//!
//! Every route is served under `/api`. Handlers are thin: they parse the
//! request, call a service against the shared [`Storage`], and wrap the
//! result in JSON. Errors become `{"error": message}` bodies.

pub mod categories;
pub mod dashboard;
pub mod error;
pub mod goals;
pub mod transactions;

use std::str::FromStr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Settings;
use crate::storage::Storage;

pub use error::{ApiError, ApiResult};

/// Shared state handed to every handler
pub struct AppState {
    pub storage: Arc<Storage>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(storage: Storage, settings: Settings) -> Arc<Self> {
        Arc::new(Self {
            storage: Arc::new(storage),
            settings,
        })
    }
}

/// Body returned by create endpoints
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: u64,
    pub message: &'static str,
}

/// Body returned by update and delete endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Parse an id from a path segment, accepting `7` or `goal-7`
pub(crate) fn parse_id<T: FromStr>(raw: &str, entity: &str) -> ApiResult<T> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} id: {}", entity, raw)))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(transactions::router())
        .merge(categories::router())
        .merge(goals::router())
        .merge(dashboard::router());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
