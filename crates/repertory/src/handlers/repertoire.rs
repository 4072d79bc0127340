use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use repertory_core::music::PieceStatus;

use crate::{
    handlers::{json_response, AppError},
    models::{AddRepertoireEntry, RepertoireQuery},
    state::AppState,
};

/// List a user's repertoire (GET /users/{user_id}/repertoire).
///
/// With `?status=<status>` only entries with that status are returned. An
/// unknown user yields an empty array.
#[axum::debug_handler]
pub async fn list_repertoire(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<RepertoireQuery>,
) -> Result<Response, AppError> {
    let entries = match query.status.as_deref() {
        Some(status) => {
            state
                .repertory
                .find_pieces_by_status(&user_id, &PieceStatus::from(status))
                .await?
        }
        None => state.repertory.get_user_repertoire(&user_id).await?,
    };

    Ok(json_response(StatusCode::OK, &entries))
}

/// Add a piece to a user's repertoire (POST /users/{user_id}/repertoire).
///
/// Overwrites an existing entry for the same piece.
#[axum::debug_handler]
pub async fn add_repertoire_entry(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<AddRepertoireEntry>,
) -> Result<Response, AppError> {
    let entry = payload.into_entry(user_id);
    state.repertory.add_to_repertoire(&entry).await?;
    Ok(json_response(StatusCode::CREATED, &entry))
}
