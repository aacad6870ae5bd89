use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An instrument that can be attached to users and rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub id: i32,
    pub name: String,
}

impl Instrument {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::instrument::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> InstrumentDto {
        InstrumentDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDto {
    pub id: i32,
    pub name: String,
}

/// Request body for attaching or detaching an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachInstrumentDto {
    pub instrument_id: i32,
}
