use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000002_create_room_table::Room;
use super::m20260810_000003_create_instrument_table::Instrument;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomInstrument::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomInstrument::Id))
                    .col(integer(RoomInstrument::RoomId))
                    .col(integer(RoomInstrument::InstrumentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_instrument_room_id")
                            .from(RoomInstrument::Table, RoomInstrument::RoomId)
                            .to(Room::Table, Room::RoomId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_instrument_instrument_id")
                            .from(RoomInstrument::Table, RoomInstrument::InstrumentId)
                            .to(Instrument::Table, Instrument::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_room_instrument_unique")
                            .col(RoomInstrument::RoomId)
                            .col(RoomInstrument::InstrumentId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomInstrument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomInstrument {
    Table,
    Id,
    RoomId,
    InstrumentId,
}
