use crate::data::{room::RoomRepository, room_instrument::RoomInstrumentRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
