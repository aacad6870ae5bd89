use sea_orm::entity::prelude::*;

/// A piece of equipment that can be attached to users (instruments they
/// play) and to rooms (instruments available on site).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "instrument")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_instrument::Entity")]
    RoomInstrument,
    #[sea_orm(has_many = "super::user_instrument::Entity")]
    UserInstrument,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_instrument::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_instrument::Relation::Instrument.def().rev())
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_instrument::Relation::Room.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_instrument::Relation::Instrument.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
