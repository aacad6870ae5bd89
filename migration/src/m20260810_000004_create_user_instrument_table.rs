use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;
use super::m20260810_000003_create_instrument_table::Instrument;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserInstrument::Table)
                    .if_not_exists()
                    .col(pk_auto(UserInstrument::Id))
                    .col(string(UserInstrument::UserLogin))
                    .col(integer(UserInstrument::InstrumentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_instrument_user_login")
                            .from(UserInstrument::Table, UserInstrument::UserLogin)
                            .to(User::Table, User::Login)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_instrument_instrument_id")
                            .from(UserInstrument::Table, UserInstrument::InstrumentId)
                            .to(Instrument::Table, Instrument::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_instrument_unique")
                            .col(UserInstrument::UserLogin)
                            .col(UserInstrument::InstrumentId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInstrument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserInstrument {
    Table,
    Id,
    UserLogin,
    InstrumentId,
}
