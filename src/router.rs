use axum::{
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    controller::{room, user},
    model::{api, instrument, reservation, room as room_model, user as user_model},
    state::AppState,
};

/// OpenAPI document covering every endpoint of the reservation backend.
#[derive(OpenApi)]
#[openapi(
    paths(
        room::get_room,
        room::update_room,
        room::add_room_instrument,
        room::delete_room_instrument,
        user::get_all_users,
        user::get_current_user,
        user::update_current_user_telephone,
        user::add_current_user_instrument,
        user::delete_current_user_instrument,
        user::get_current_user_reservations,
        user::get_user,
        user::update_user_rights,
        user::get_user_reservations,
    ),
    components(schemas(
        api::ErrorDto,
        instrument::InstrumentDto,
        instrument::AttachInstrumentDto,
        room_model::RoomDto,
        room_model::RoomDetailDto,
        room_model::UpdateRoomDto,
        user_model::UserDto,
        user_model::UserProfileDto,
        user_model::UpdateTelephoneDto,
        user_model::UpdateUserRightsDto,
        reservation::ReservationDto,
        reservation::ReservationDetailDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/rooms/{room_id}",
            get(room::get_room).put(room::update_room),
        )
        .route(
            "/api/rooms/{room_id}/instruments",
            post(room::add_room_instrument).delete(room::delete_room_instrument),
        )
        .route("/api/users", get(user::get_all_users))
        .route("/api/users/me", get(user::get_current_user))
        .route(
            "/api/users/me/telephone",
            put(user::update_current_user_telephone),
        )
        .route(
            "/api/users/me/instruments",
            post(user::add_current_user_instrument)
                .delete(user::delete_current_user_instrument),
        )
        .route(
            "/api/users/me/reservations",
            get(user::get_current_user_reservations),
        )
        .route("/api/users/{login}", get(user::get_user))
        .route("/api/users/{login}/rights", put(user::update_user_rights))
        .route(
            "/api/users/{login}/reservations",
            get(user::get_user_reservations),
        )
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}
