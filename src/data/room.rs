//! Room data repository for database operations.
//!
//! This module provides the `RoomRepository` for managing room records in the
//! database. It handles room queries with and without the attached instrument
//! list and the partial room update, converting entity models to domain
//! models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::{
    instrument::Instrument,
    room::{Room, UpdateRoomParam},
};

/// Repository providing database operations for room management.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new RoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a room by its id.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room to look up
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found
    /// - `Ok(None)` - No room with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(room_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Finds a room by its id together with its attached instruments.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room to look up
    ///
    /// # Returns
    /// - `Ok(Some((room, instruments)))` - Room found, instruments may be empty
    /// - `Ok(None)` - No room with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_instruments(
        &self,
        room_id: i32,
    ) -> Result<Option<(Room, Vec<Instrument>)>, DbErr> {
        let mut rows = entity::prelude::Room::find_by_id(room_id)
            .find_with_related(entity::prelude::Instrument)
            .all(self.db)
            .await?;

        let Some((room, instruments)) = rows.pop() else {
            return Ok(None);
        };

        Ok(Some((
            Room::from_entity(room),
            instruments.into_iter().map(Instrument::from_entity).collect(),
        )))
    }

    /// Gets all rooms with their attached instruments, ordered by id.
    ///
    /// Used by the diagnostic table dump; the request-serving path always
    /// addresses rooms individually.
    ///
    /// # Returns
    /// - `Ok(Vec<(Room, Vec<Instrument>)>)` - All rooms with instrument lists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_instruments(
        &self,
    ) -> Result<Vec<(Room, Vec<Instrument>)>, DbErr> {
        let rows = entity::prelude::Room::find()
            .find_with_related(entity::prelude::Instrument)
            .order_by_asc(entity::room::Column::RoomId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(room, instruments)| {
                (
                    Room::from_entity(room),
                    instruments.into_iter().map(Instrument::from_entity).collect(),
                )
            })
            .collect())
    }

    /// Applies a partial update to a room.
    ///
    /// Only fields present in the parameter are written; absent fields keep
    /// their stored value.
    ///
    /// # Arguments
    /// - `room_id` - Id of the room to update
    /// - `param` - Partial update with the fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - The updated room
    /// - `Ok(None)` - No room with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        room_id: i32,
        param: UpdateRoomParam,
    ) -> Result<Option<Room>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(room_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut room: entity::room::ActiveModel = room.into();
        if let Some(capacity) = param.capacity {
            room.capacity = ActiveValue::Set(capacity);
        }
        if let Some(photo_path) = param.photo_path {
            room.photo_path = ActiveValue::Set(photo_path);
        }
        if let Some(purpose) = param.purpose {
            room.purpose = ActiveValue::Set(purpose);
        }
        if let Some(restricted) = param.restricted {
            room.restricted = ActiveValue::Set(restricted);
        }

        let updated = room.update(self.db).await?;

        Ok(Some(Room::from_entity(updated)))
    }
}
