//! Room service for business logic.
//!
//! This module provides the `RoomService` for room reads, partial updates,
//! and instrument attachment. All operations answer with the room aggregate
//! (room plus current instrument list) and raise `NotFound` when a room or
//! instrument id does not resolve.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        instrument::InstrumentRepository, room::RoomRepository,
        room_instrument::RoomInstrumentRepository,
    },
    error::AppError,
    model::room::{RoomDetail, UpdateRoomParam},
};

/// Service providing business logic for room management.
pub struct RoomService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    /// Creates a new RoomService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a room together with its attached instruments.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room to fetch
    ///
    /// # Returns
    /// - `Ok(RoomDetail)` - The room with its instrument list
    /// - `Err(AppError::NotFound)` - No room with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_room(&self, room_id: i32) -> Result<RoomDetail, AppError> {
        let room_repo = RoomRepository::new(self.db);

        let (room, instruments) = room_repo
            .find_with_instruments(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("room {} not found", room_id)))?;

        Ok(RoomDetail { room, instruments })
    }

    /// Applies a partial update to a room and returns the updated aggregate.
    ///
    /// Fields absent from the parameter are left unchanged.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room to update
    /// - `param` - Partial update with the fields to overwrite
    ///
    /// # Returns
    /// - `Ok(RoomDetail)` - The updated room with its instrument list
    /// - `Err(AppError::NotFound)` - No room with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_room(
        &self,
        room_id: i32,
        param: UpdateRoomParam,
    ) -> Result<RoomDetail, AppError> {
        let room_repo = RoomRepository::new(self.db);

        room_repo
            .update(room_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("room {} not found", room_id)))?;

        self.get_room(room_id).await
    }

    /// Attaches an instrument to a room.
    ///
    /// Idempotent: attaching an already-attached instrument leaves the set
    /// unchanged. Both ids must resolve.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room
    /// - `instrument_id` - Id of the instrument to attach
    ///
    /// # Returns
    /// - `Ok(RoomDetail)` - The room with its updated instrument list
    /// - `Err(AppError::NotFound)` - Unknown room or instrument id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_instrument(
        &self,
        room_id: i32,
        instrument_id: i32,
    ) -> Result<RoomDetail, AppError> {
        self.resolve_pair(room_id, instrument_id).await?;

        RoomInstrumentRepository::new(self.db)
            .add(room_id, instrument_id)
            .await?;

        self.get_room(room_id).await
    }

    /// Detaches an instrument from a room.
    ///
    /// Detaching a never-attached instrument is a no-op, not an error. Both
    /// ids must resolve.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room
    /// - `instrument_id` - Id of the instrument to detach
    ///
    /// # Returns
    /// - `Ok(RoomDetail)` - The room with its updated instrument list
    /// - `Err(AppError::NotFound)` - Unknown room or instrument id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_instrument(
        &self,
        room_id: i32,
        instrument_id: i32,
    ) -> Result<RoomDetail, AppError> {
        self.resolve_pair(room_id, instrument_id).await?;

        RoomInstrumentRepository::new(self.db)
            .remove(room_id, instrument_id)
            .await?;

        self.get_room(room_id).await
    }

    /// Checks that both the room and the instrument exist.
    async fn resolve_pair(&self, room_id: i32, instrument_id: i32) -> Result<(), AppError> {
        RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("room {} not found", room_id)))?;

        InstrumentRepository::new(self.db)
            .find_by_id(instrument_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("instrument {} not found", instrument_id))
            })?;

        Ok(())
    }
}
