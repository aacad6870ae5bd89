use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        instrument::AttachInstrumentDto,
        room::{RoomDetailDto, UpdateRoomDto, UpdateRoomParam},
    },
    service::room::RoomService,
    state::AppState,
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// GET /api/rooms/{room_id} - Get a room with its instruments
///
/// Returns the room identified by the path id together with the instruments
/// currently attached to it.
///
/// # Access Control
/// - Requires the caller to be logged in
///
/// # Returns
/// - `200 OK` - Room with its instrument list
/// - `401 Unauthorized` - Caller not logged in
/// - `404 Not Found` - Unknown room id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room with its instruments", body = RoomDetailDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 404, description = "Unknown room id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = RoomService::new(&state.db).get_room(room_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// PUT /api/rooms/{room_id} - Update a room
///
/// Applies a partial update to the room: only fields present in the body are
/// overwritten, absent fields keep their stored value.
///
/// # Access Control
/// - `Admin` - Only admins can update rooms
///
/// # Returns
/// - `200 OK` - Updated room with its instrument list
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown room id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room id")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDetailDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown room id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateRoomParam::from_dto(payload);
    let detail = RoomService::new(&state.db).update_room(room_id, param).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// POST /api/rooms/{room_id}/instruments - Attach an instrument to a room
///
/// Attaching an already-attached instrument is a no-op; the response always
/// carries the current instrument list.
///
/// # Access Control
/// - `Admin` - Only admins can change room equipment
///
/// # Returns
/// - `200 OK` - Room with its updated instrument list
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown room or instrument id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/rooms/{room_id}/instruments",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room id")
    ),
    request_body = AttachInstrumentDto,
    responses(
        (status = 200, description = "Room with its updated instruments", body = RoomDetailDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown room or instrument id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_room_instrument(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
    Json(payload): Json<AttachInstrumentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detail = RoomService::new(&state.db)
        .add_instrument(room_id, payload.instrument_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// DELETE /api/rooms/{room_id}/instruments - Detach an instrument from a room
///
/// Detaching a never-attached instrument is a no-op; the response always
/// carries the current instrument list.
///
/// # Access Control
/// - `Admin` - Only admins can change room equipment
///
/// # Returns
/// - `200 OK` - Room with its updated instrument list
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown room or instrument id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/rooms/{room_id}/instruments",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room id")
    ),
    request_body = AttachInstrumentDto,
    responses(
        (status = 200, description = "Room with its updated instruments", body = RoomDetailDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown room or instrument id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room_instrument(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
    Json(payload): Json<AttachInstrumentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detail = RoomService::new(&state.db)
        .remove_instrument(room_id, payload.instrument_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}
