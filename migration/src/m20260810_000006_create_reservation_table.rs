use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;
use super::m20260810_000002_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(timestamp_with_time_zone(Reservation::Beginning))
                    .col(timestamp_with_time_zone(Reservation::End))
                    .col(string(Reservation::UserLogin))
                    .col(integer(Reservation::RoomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_login")
                            .from(Reservation::Table, Reservation::UserLogin)
                            .to(User::Table, User::Login)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::RoomId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_reservation_user_beginning")
                            .col(Reservation::UserLogin)
                            .col(Reservation::Beginning),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Beginning,
    End,
    UserLogin,
    RoomId,
}
