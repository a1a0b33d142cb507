//! Dashboard route: `GET /dashboard?month=YYYY-MM`, defaulting to the current month

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{AppState, ApiError, ApiResult};
use crate::models::Month;
use crate::reports::DashboardReport;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    month: Option<String>,
}

/// Dashboard for the current month, or `?month=YYYY-MM`
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> ApiResult<Json<DashboardReport>> {
    let Query(query) = query?;
    let month = match query.month.as_deref().filter(|s| !s.is_empty()) {
        Some(month) => month
            .parse::<Month>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => Month::current(),
    };

    let report = DashboardReport::generate_for_month(&state.storage, &state.settings, month)?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
