//! Reservation domain models.
//!
//! Reservations are read-only in this backend: they are created by
//! collaborator code and only queried here. Upcoming-reservation queries
//! always include the reserving user and the reserved room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    room::{Room, RoomDto},
    user::{User, UserDto},
};

/// A time-bounded booking linking one user to one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub beginning: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub user_login: String,
    pub room_id: i32,
}

impl Reservation {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            beginning: entity.beginning,
            end: entity.end,
            user_login: entity.user_login,
            room_id: entity.room_id,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            beginning: self.beginning,
            end: self.end,
            user_login: self.user_login,
            room_id: self.room_id,
        }
    }
}

/// A reservation together with its user and room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDetail {
    pub reservation: Reservation,
    pub user: User,
    pub room: Room,
}

impl ReservationDetail {
    pub fn into_dto(self) -> ReservationDetailDto {
        ReservationDetailDto {
            id: self.reservation.id,
            beginning: self.reservation.beginning,
            end: self.reservation.end,
            user: self.user.into_dto(),
            room: self.room.into_dto(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub beginning: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub user_login: String,
    pub room_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetailDto {
    pub id: i32,
    pub beginning: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub user: UserDto,
    pub room: RoomDto,
}
