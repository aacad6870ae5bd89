use sea_orm::entity::prelude::*;

/// Join record for the user ↔ instrument many-to-many association.
/// Carries only the two foreign keys; (user_login, instrument_id) is
/// unique so attaching twice cannot create duplicate rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_instrument")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_login: String,
    pub instrument_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserLogin",
        to = "super::user::Column::Login",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::instrument::Entity",
        from = "Column::InstrumentId",
        to = "super::instrument::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Instrument,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instrument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
