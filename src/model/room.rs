//! Room domain models and parameters.
//!
//! Provides the room domain model, the room-with-instruments aggregate
//! returned by the room endpoints, and the partial-update parameter type.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::instrument::{Instrument, InstrumentDto};

/// A rehearsal room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_id: i32,
    pub capacity: i32,
    pub photo_path: String,
    pub purpose: String,
    pub restricted: bool,
}

impl Room {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            room_id: entity.room_id,
            capacity: entity.capacity,
            photo_path: entity.photo_path,
            purpose: entity.purpose,
            restricted: entity.restricted,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            room_id: self.room_id,
            capacity: self.capacity,
            photo_path: self.photo_path,
            purpose: self.purpose,
            restricted: self.restricted,
        }
    }
}

/// A room together with its attached instruments.
///
/// All room endpoints answer with this aggregate so clients always see the
/// current instrument list after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub room: Room,
    pub instruments: Vec<Instrument>,
}

impl RoomDetail {
    pub fn into_dto(self) -> RoomDetailDto {
        RoomDetailDto {
            room_id: self.room.room_id,
            capacity: self.room.capacity,
            photo_path: self.room.photo_path,
            purpose: self.room.purpose,
            restricted: self.room.restricted,
            instruments: self.instruments.into_iter().map(|i| i.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_id: i32,
    pub capacity: i32,
    pub photo_path: String,
    pub purpose: String,
    pub restricted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub room_id: i32,
    pub capacity: i32,
    pub photo_path: String,
    pub purpose: String,
    pub restricted: bool,
    pub instruments: Vec<InstrumentDto>,
}

/// Request body for updating a room.
///
/// Every field is optional: absent fields are left unchanged rather than
/// overwritten with empty values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomDto {
    pub capacity: Option<i32>,
    pub photo_path: Option<String>,
    pub purpose: Option<String>,
    pub restricted: Option<bool>,
}

/// Parameters for a partial room update. `None` fields are not touched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParam {
    pub capacity: Option<i32>,
    pub photo_path: Option<String>,
    pub purpose: Option<String>,
    pub restricted: Option<bool>,
}

impl UpdateRoomParam {
    pub fn from_dto(dto: UpdateRoomDto) -> Self {
        Self {
            capacity: dto.capacity,
            photo_path: dto.photo_path,
            purpose: dto.purpose,
            restricted: dto.restricted,
        }
    }
}
