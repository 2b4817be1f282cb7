use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::AppState;
use crate::error::ApiError;

/// GET /api/rooms — the full room list, no pagination or filtering.
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    // Run blocking DB reads off the async runtime
    let rooms = tokio::task::spawn_blocking(move || state.db.list_rooms())
        .await
        .map_err(anyhow::Error::from)??;

    Ok(Json(rooms))
}

/// GET /api/rooms/{slug}
pub async fn get_room(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let room = tokio::task::spawn_blocking(move || state.db.room_by_slug(&slug))
        .await
        .map_err(anyhow::Error::from)??;

    match room {
        Some(room) => Ok(Json(room)),
        None => Err(ApiError::NotFound("Room not found")),
    }
}
