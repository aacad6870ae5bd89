use sea_orm::entity::prelude::*;

/// A member of the association. The login is issued by the external OAuth
/// provider and is immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub login: String,
    pub full_name: String,
    pub mail: String,
    pub telephone: String,
    pub admin: bool,
    pub adherent: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::user_instrument::Entity")]
    UserInstrument,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::user_instrument::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserInstrument.def()
    }
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_instrument::Relation::Instrument.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_instrument::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
