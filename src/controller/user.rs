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
        reservation::ReservationDetailDto,
        user::{
            UpdateTelephoneDto, UpdateUserRightsDto, UpdateUserRightsParam, UserDto,
            UserProfileDto,
        },
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /api/users - List all users with their instruments
///
/// Returns every user in the database. The result set is unbounded by
/// design: the member base is small and the endpoint is admin-only.
///
/// # Access Control
/// - `Admin` - Only admins can list the member base
///
/// # Returns
/// - `200 OK` - JSON array of user profiles
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users with their instruments", body = Vec<UserProfileDto>),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profiles = UserService::new(&state.db).get_all_users().await?;
    let dtos: Vec<_> = profiles.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/users/me - Get the authenticated user's profile
///
/// # Access Control
/// - Requires the caller to be logged in
///
/// # Returns
/// - `200 OK` - The caller's profile with their instruments
/// - `401 Unauthorized` - Caller not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = UserProfileDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db).get_profile(&user.login).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// PUT /api/users/me/telephone - Update the authenticated user's telephone
///
/// # Access Control
/// - Requires the caller to be logged in
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Caller not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/me/telephone",
    tag = USER_TAG,
    request_body = UpdateTelephoneDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_current_user_telephone(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateTelephoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = UserService::new(&state.db)
        .update_telephone(&user.login, payload.telephone)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// POST /api/users/me/instruments - Attach an instrument to the authenticated user
///
/// Attaching an already-attached instrument is a no-op; the response always
/// carries the current instrument list.
///
/// # Access Control
/// - Requires the caller to be logged in
///
/// # Returns
/// - `200 OK` - The caller's profile with the updated instrument list
/// - `401 Unauthorized` - Caller not logged in
/// - `404 Not Found` - Unknown instrument id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/me/instruments",
    tag = USER_TAG,
    request_body = AttachInstrumentDto,
    responses(
        (status = 200, description = "The caller's updated profile", body = UserProfileDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 404, description = "Unknown instrument id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_current_user_instrument(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AttachInstrumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .add_instrument(&user.login, payload.instrument_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// DELETE /api/users/me/instruments - Detach an instrument from the authenticated user
///
/// Detaching a never-attached instrument is a no-op; the response always
/// carries the current instrument list.
///
/// # Access Control
/// - Requires the caller to be logged in
///
/// # Returns
/// - `200 OK` - The caller's profile with the updated instrument list
/// - `401 Unauthorized` - Caller not logged in
/// - `404 Not Found` - Unknown instrument id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/me/instruments",
    tag = USER_TAG,
    request_body = AttachInstrumentDto,
    responses(
        (status = 200, description = "The caller's updated profile", body = UserProfileDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 404, description = "Unknown instrument id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_current_user_instrument(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AttachInstrumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .remove_instrument(&user.login, payload.instrument_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// GET /api/users/me/reservations - Get the authenticated user's upcoming reservations
///
/// Returns reservations whose beginning is at or after the time of the call,
/// earliest first, each with its user and room.
///
/// # Access Control
/// - Requires the caller to be logged in
///
/// # Returns
/// - `200 OK` - JSON array of upcoming reservations
/// - `401 Unauthorized` - Caller not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/me/reservations",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Upcoming reservations, earliest first", body = Vec<ReservationDetailDto>),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let details = UserService::new(&state.db)
        .upcoming_reservations(&user.login)
        .await?;
    let dtos: Vec<_> = details.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/users/{login} - Get a user's profile by login
///
/// # Access Control
/// - `Admin` - Only admins can look up arbitrary members
///
/// # Returns
/// - `200 OK` - The user's profile with their instruments
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown login
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{login}",
    tag = USER_TAG,
    params(
        ("login" = String, Path, description = "Login issued by the OAuth provider")
    ),
    responses(
        (status = 200, description = "The user's profile", body = UserProfileDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown login", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(login): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profile = UserService::new(&state.db).get_profile(&login).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// PUT /api/users/{login}/rights - Replace a user's role flags
///
/// Replaces exactly the `{adherent, admin}` pair; a request omitting either
/// flag is rejected at deserialization.
///
/// # Access Control
/// - `Admin` - Only admins can change role flags
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown login
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{login}/rights",
    tag = USER_TAG,
    params(
        ("login" = String, Path, description = "Login issued by the OAuth provider")
    ),
    request_body = UpdateUserRightsDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown login", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_rights(
    State(state): State<AppState>,
    session: Session,
    Path(login): Path<String>,
    Json(payload): Json<UpdateUserRightsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateUserRightsParam::from_dto(payload);
    let updated = UserService::new(&state.db).set_rights(&login, param).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// GET /api/users/{login}/reservations - Get a named user's upcoming reservations
///
/// Same shape as the current-user variant: beginning at or after the time of
/// the call, earliest first, each with its user and room.
///
/// # Access Control
/// - `Admin` - Only admins can inspect another member's reservations
///
/// # Returns
/// - `200 OK` - JSON array of upcoming reservations
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown login
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{login}/reservations",
    tag = USER_TAG,
    params(
        ("login" = String, Path, description = "Login issued by the OAuth provider")
    ),
    responses(
        (status = 200, description = "Upcoming reservations, earliest first", body = Vec<ReservationDetailDto>),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown login", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_reservations(
    State(state): State<AppState>,
    session: Session,
    Path(login): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let details = UserService::new(&state.db).upcoming_reservations(&login).await?;
    let dtos: Vec<_> = details.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
