//! Savings goal routes

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};

use super::{parse_id, AppState, ApiResult, CreatedResponse, MessageResponse};
use crate::error::MoneyFlowError;
use crate::models::{GoalId, GoalProgress};
use crate::services::{CreateGoalInput, GoalService, GoalUpdate};

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GoalProgress>>> {
    let goals = GoalService::new(&state.storage).list_with_progress()?;
    Ok(Json(goals))
}

async fn get_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GoalProgress>> {
    let id: GoalId = parse_id(&id, "goal")?;
    let goal = GoalService::new(&state.storage)
        .get(id)?
        .ok_or_else(|| MoneyFlowError::goal_not_found(id.to_string()))?;
    Ok(Json(GoalProgress::from(goal)))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGoalInput>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let Json(input) = payload?;
    let goal = GoalService::new(&state.storage).create(input)?;
    Ok(Json(CreatedResponse {
        id: goal.id.value(),
        message: "Goal added successfully",
    }))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GoalUpdate>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id: GoalId = parse_id(&id, "goal")?;
    let Json(update) = payload?;
    GoalService::new(&state.storage).update(id, update)?;
    Ok(MessageResponse::new("Goal updated successfully"))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    let id: GoalId = parse_id(&id, "goal")?;
    GoalService::new(&state.storage).delete(id)?;
    Ok(MessageResponse::new("Goal deleted successfully"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
}
