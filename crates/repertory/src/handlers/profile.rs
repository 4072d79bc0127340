use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    handlers::{json_response, AppError},
    state::AppState,
};

/// Get a user's full profile (GET /users/{user_id}/profile).
///
/// 404 when the user does not exist.
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    match state.repertory.get_user_profile(&user_id).await? {
        Some(profile) => Ok(json_response(StatusCode::OK, &profile)),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
