//! User domain models and parameters.
//!
//! Provides the user domain model keyed by the externally issued login, the
//! user-with-instruments aggregate used by the profile endpoints, and the
//! parameter type for role flag updates.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::instrument::{Instrument, InstrumentDto};

/// A member of the association.
///
/// The login is issued by the external OAuth provider and immutable after
/// creation. `admin` and `adherent` are the two role flags managed through
/// the rights endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: String,
    pub full_name: String,
    pub mail: String,
    pub telephone: String,
    pub admin: bool,
    pub adherent: bool,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            login: entity.login,
            full_name: entity.full_name,
            mail: entity.mail,
            telephone: entity.telephone,
            admin: entity.admin,
            adherent: entity.adherent,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            login: self.login,
            full_name: self.full_name,
            mail: self.mail,
            telephone: self.telephone,
            admin: self.admin,
            adherent: self.adherent,
        }
    }
}

/// A user together with the instruments they play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user: User,
    pub instruments: Vec<Instrument>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            login: self.user.login,
            full_name: self.user.full_name,
            mail: self.user.mail,
            telephone: self.user.telephone,
            admin: self.user.admin,
            adherent: self.user.adherent,
            instruments: self.instruments.into_iter().map(|i| i.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub login: String,
    pub full_name: String,
    pub mail: String,
    pub telephone: String,
    pub admin: bool,
    pub adherent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub login: String,
    pub full_name: String,
    pub mail: String,
    pub telephone: String,
    pub admin: bool,
    pub adherent: bool,
    pub instruments: Vec<InstrumentDto>,
}

/// Request body for updating the authenticated user's telephone.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTelephoneDto {
    pub telephone: String,
}

/// Request body for updating a user's role flags.
///
/// Both flags are required: the operation replaces exactly this pair, and a
/// request omitting one of them is rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRightsDto {
    pub adherent: bool,
    pub admin: bool,
}

/// Parameters for replacing a user's role flag pair.
#[derive(Debug, Clone)]
pub struct UpdateUserRightsParam {
    pub adherent: bool,
    pub admin: bool,
}

impl UpdateUserRightsParam {
    pub fn from_dto(dto: UpdateUserRightsDto) -> Self {
        Self {
            adherent: dto.adherent,
            admin: dto.admin,
        }
    }
}
