use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiError, FieldError},
    state::AppState,
    users::{dto::CreateUserRequest, repo_types::User, services::validate_new_user},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection, "unreadable user body");
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    })?;

    let new_user = validate_new_user(req).map_err(|details| {
        warn!(?details, "user validation failed");
        ApiError::Validation(details)
    })?;

    let user = state.store.create_user(new_user).await?;
    info!(user_id = %user.id, age = user.age, intensity = %user.intensity, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}
