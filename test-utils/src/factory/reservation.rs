//! Reservation factory for creating test reservation entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Requires an existing user login and room id; the referenced rows must be
/// inserted first or the foreign keys will reject the insert.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{Duration, Utc};
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, &user.login, room.room_id)
///     .beginning(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    beginning: DateTime<Utc>,
    end: DateTime<Utc>,
    user_login: String,
    room_id: i32,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - beginning: one hour from now
    /// - end: two hours from now
    pub fn new(db: &'a DatabaseConnection, user_login: impl Into<String>, room_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            beginning: now + Duration::hours(1),
            end: now + Duration::hours(2),
            user_login: user_login.into(),
            room_id,
        }
    }

    /// Sets the beginning of the reservation.
    pub fn beginning(mut self, beginning: DateTime<Utc>) -> Self {
        self.beginning = beginning;
        self
    }

    /// Sets the end of the reservation.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = end;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            beginning: ActiveValue::Set(self.beginning),
            end: ActiveValue::Set(self.end),
            user_login: ActiveValue::Set(self.user_login),
            room_id: ActiveValue::Set(self.room_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given user and room.
///
/// Shorthand for `ReservationFactory::new(db, user_login, room_id).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_login: impl Into<String>,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_login, room_id).build().await
}
