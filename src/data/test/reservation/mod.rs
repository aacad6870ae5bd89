use crate::{data::reservation::ReservationRepository, model::user::User};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
