//! Room snapshot handlers: read the current state, overwrite it.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{RoomStateResponse, UpdateRoomRequest, UpdateRoomResponse};
use crate::app_state::AppState;
use crate::domain::RoomId;
use crate::error::{ErrorResponse, KioskError};

/// `GET /rooms/{id}/current` — Current snapshot for a room.
///
/// # Errors
///
/// Returns [`KioskError::InvalidRoomId`] for a malformed id or a
/// persistence error if the read fails. A room that was never assigned
/// is a success with null payload, not an error.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}/current",
    tag = "Rooms",
    summary = "Read a room snapshot",
    description = "Returns the latest assignment for the room, or explicit nulls when the room is free.",
    params(
        ("id" = i32, Path, description = "Room id (positive integer)"),
    ),
    responses(
        (status = 200, description = "Current room state", body = RoomStateResponse),
        (status = 400, description = "Invalid room id", body = ErrorResponse),
    )
)]
pub async fn current_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, KioskError> {
    let room_id = RoomId::parse(&id)?;
    let room = state.room_service.current(room_id).await?;

    Ok(Json(RoomStateResponse {
        ok: true,
        room_id: room.room_id,
        payload: room.payload,
        updated_at: room.updated_at,
    }))
}

/// `POST /rooms/{id}/update` — Overwrite a room snapshot.
///
/// The previous snapshot is fully replaced — there is no history and no
/// merge. The response echoes the payload exactly as stored.
///
/// # Errors
///
/// Returns [`KioskError::InvalidRoomId`] or
/// [`KioskError::InvalidRequest`] when validation fails (nothing is
/// written in that case), or a persistence error if the upsert fails.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/update",
    tag = "Rooms",
    summary = "Assign a room",
    description = "Validates and normalizes the assignment, then overwrites the room's stored snapshot (last write wins).",
    params(
        ("id" = i32, Path, description = "Room id (positive integer)"),
    ),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Snapshot overwritten", body = UpdateRoomResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, KioskError> {
    let room_id = RoomId::parse(&id)?;
    let payload = state.room_service.assign(room_id, req.into()).await?;

    Ok(Json(UpdateRoomResponse {
        ok: true,
        room_id,
        payload,
    }))
}

/// Room snapshot routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rooms/{id}/current", get(current_room))
        .route("/rooms/{id}/update", post(update_room))
}
