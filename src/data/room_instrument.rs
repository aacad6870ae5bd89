//! Room instrument association repository for database operations.
//!
//! This module provides the `RoomInstrumentRepository` for managing the
//! many-to-many relationship between rooms and instruments. Semantics mirror
//! the user ↔ instrument association: idempotent attach, no-op detach of an
//! absent pair.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// Repository for room ↔ instrument relationship operations.
pub struct RoomInstrumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomInstrumentRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches an instrument to a room.
    ///
    /// Checks for an existing join record before inserting so repeating the
    /// call cannot create duplicate rows; the unique index on
    /// (room_id, instrument_id) backs this up at the database level.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room
    /// - `instrument_id` - Id of the instrument to attach
    ///
    /// # Returns
    /// - `Ok(())` - Association exists after the call (created or already present)
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add(&self, room_id: i32, instrument_id: i32) -> Result<(), DbErr> {
        let exists = entity::prelude::RoomInstrument::find()
            .filter(entity::room_instrument::Column::RoomId.eq(room_id))
            .filter(entity::room_instrument::Column::InstrumentId.eq(instrument_id))
            .one(self.db)
            .await?;

        if exists.is_none() {
            entity::prelude::RoomInstrument::insert(entity::room_instrument::ActiveModel {
                room_id: ActiveValue::Set(room_id),
                instrument_id: ActiveValue::Set(instrument_id),
                ..Default::default()
            })
            .exec(self.db)
            .await?;
        }

        Ok(())
    }

    /// Detaches an instrument from a room.
    ///
    /// No-op if the pair is not associated.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room
    /// - `instrument_id` - Id of the instrument to detach
    ///
    /// # Returns
    /// - `Ok(())` - Association absent after the call (deleted or never existed)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove(&self, room_id: i32, instrument_id: i32) -> Result<(), DbErr> {
        entity::prelude::RoomInstrument::delete_many()
            .filter(entity::room_instrument::Column::RoomId.eq(room_id))
            .filter(entity::room_instrument::Column::InstrumentId.eq(instrument_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
