use crate::{
    data::{room::RoomRepository, room_instrument::RoomInstrumentRepository},
    model::room::UpdateRoomParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_with_instruments;
mod update;
