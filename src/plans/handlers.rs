use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::{
    error::ApiError,
    plans::{
        dto::{CreatePlanRequest, PlanWithUser},
        repo_types::FitnessPlan,
        services::create_plan_for_user,
    },
    state::AppState,
};

pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/fitness-plans", post(create_plan))
        .route("/fitness-plans/:id", get(get_plan))
        .route("/users/:user_id/fitness-plans", get(list_user_plans))
}

/// POST /fitness-plans { userId }
#[instrument(skip(state, payload))]
pub async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FitnessPlan>), ApiError> {
    // No usable body means no user id.
    let req = payload.map(|Json(req)| req).unwrap_or_else(|rejection| {
        warn!(error = %rejection, "unreadable plan body");
        CreatePlanRequest::default()
    });

    let raw_id = req
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::BadRequest("User ID is required"))?;

    // An id that is not a UUID cannot name a stored user.
    let user_id = Uuid::parse_str(&raw_id).map_err(|_| {
        debug!(user_id = %raw_id, "malformed user id");
        ApiError::NotFound("User not found")
    })?;

    let plan = create_plan_for_user(state.store.as_ref(), user_id).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /users/:user_id/fitness-plans, newest first
#[instrument(skip(state))]
pub async fn list_user_plans(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FitnessPlan>>, ApiError> {
    let Ok(user_id) = Uuid::parse_str(&user_id) else {
        return Ok(Json(Vec::new()));
    };
    let plans = state.store.list_plans_for_user(user_id).await?;
    debug!(%user_id, count = plans.len(), "listed fitness plans");
    Ok(Json(plans))
}

#[instrument(skip(state))]
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlanWithUser>, ApiError> {
    let not_found = ApiError::NotFound("Fitness plan not found");
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(not_found);
    };
    match state.store.find_plan(id).await? {
        Some((plan, user)) => Ok(Json(PlanWithUser { plan, user })),
        None => Err(not_found),
    }
}
