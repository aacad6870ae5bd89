use sea_orm::entity::prelude::*;

/// A rehearsal room that members can reserve. `restricted` rooms are only
/// available to users cleared by the external access-control collaborator.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub room_id: i32,
    pub capacity: i32,
    pub photo_path: String,
    pub purpose: String,
    pub restricted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::room_instrument::Entity")]
    RoomInstrument,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::room_instrument::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomInstrument.def()
    }
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_instrument::Relation::Instrument.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_instrument::Relation::Room.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
