//! User instrument association repository for database operations.
//!
//! This module provides the `UserInstrumentRepository` for managing the
//! many-to-many relationship between users and instruments. Attaching is
//! idempotent (an existing pair is left alone) and detaching an absent pair
//! is a no-op, so both operations are safe to repeat.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// Repository for user ↔ instrument relationship operations.
pub struct UserInstrumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserInstrumentRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches an instrument to a user.
    ///
    /// Checks for an existing join record before inserting so repeating the
    /// call cannot create duplicate rows; the unique index on
    /// (user_login, instrument_id) backs this up at the database level.
    ///
    /// # Arguments
    /// - `login` - Login of the user
    /// - `instrument_id` - Id of the instrument to attach
    ///
    /// # Returns
    /// - `Ok(())` - Association exists after the call (created or already present)
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add(&self, login: &str, instrument_id: i32) -> Result<(), DbErr> {
        let exists = entity::prelude::UserInstrument::find()
            .filter(entity::user_instrument::Column::UserLogin.eq(login))
            .filter(entity::user_instrument::Column::InstrumentId.eq(instrument_id))
            .one(self.db)
            .await?;

        if exists.is_none() {
            entity::prelude::UserInstrument::insert(entity::user_instrument::ActiveModel {
                user_login: ActiveValue::Set(login.to_string()),
                instrument_id: ActiveValue::Set(instrument_id),
                ..Default::default()
            })
            .exec(self.db)
            .await?;
        }

        Ok(())
    }

    /// Detaches an instrument from a user.
    ///
    /// No-op if the pair is not associated.
    ///
    /// # Arguments
    /// - `login` - Login of the user
    /// - `instrument_id` - Id of the instrument to detach
    ///
    /// # Returns
    /// - `Ok(())` - Association absent after the call (deleted or never existed)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove(&self, login: &str, instrument_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserInstrument::delete_many()
            .filter(entity::user_instrument::Column::UserLogin.eq(login))
            .filter(entity::user_instrument::Column::InstrumentId.eq(instrument_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
