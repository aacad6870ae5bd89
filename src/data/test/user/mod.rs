use crate::{
    data::{user::UserRepository, user_instrument::UserInstrumentRepository},
    model::user::UpdateUserRightsParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_login;
mod find_with_instruments;
mod get_all_with_instruments;
mod set_rights;
mod update_telephone;
