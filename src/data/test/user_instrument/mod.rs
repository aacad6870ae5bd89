use crate::data::{user::UserRepository, user_instrument::UserInstrumentRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
