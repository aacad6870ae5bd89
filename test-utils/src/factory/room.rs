//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db)
///     .capacity(12)
///     .restricted(true)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    capacity: i32,
    photo_path: String,
    purpose: String,
    restricted: bool,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - capacity: `4`
    /// - photo_path: `"/photos/room_{id}.jpg"`
    /// - purpose: `"Rehearsal {id}"`
    /// - restricted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            capacity: 4,
            photo_path: format!("/photos/room_{}.jpg", id),
            purpose: format!("Rehearsal {}", id),
            restricted: false,
        }
    }

    /// Sets the capacity for the room.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the photo path for the room.
    pub fn photo_path(mut self, photo_path: impl Into<String>) -> Self {
        self.photo_path = photo_path.into();
        self
    }

    /// Sets the purpose for the room.
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Sets the restricted flag for the room.
    pub fn restricted(mut self, restricted: bool) -> Self {
        self.restricted = restricted;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            capacity: ActiveValue::Set(self.capacity),
            photo_path: ActiveValue::Set(self.photo_path),
            purpose: ActiveValue::Set(self.purpose),
            restricted: ActiveValue::Set(self.restricted),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
