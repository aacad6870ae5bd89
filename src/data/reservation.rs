//! Reservation data repository for database operations.
//!
//! Reservations are read-only in this backend. The upcoming-reservation
//! query compares `beginning` against a cutoff captured once by the caller,
//! so a single consistent clock observation covers the whole call.

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::{
    reservation::{Reservation, ReservationDetail},
    room::Room,
    user::User,
};

/// Repository providing database operations for reservation queries.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    /// Creates a new ReservationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's upcoming reservations with their user and room.
    ///
    /// Returns reservations whose beginning is at or after the cutoff,
    /// ascending by beginning. The caller passes the already-resolved user so
    /// existence has been checked and the user is not re-fetched per row.
    ///
    /// # Arguments
    /// - `user` - The reserving user (already resolved by the caller)
    /// - `from` - Cutoff instant; reservations beginning before it are excluded
    ///
    /// # Returns
    /// - `Ok(Vec<ReservationDetail>)` - Upcoming reservations, earliest first
    /// - `Err(DbErr)` - Database error during query, or a reservation row
    ///   whose room foreign key no longer resolves
    pub async fn find_upcoming_for_user(
        &self,
        user: &User,
        from: DateTime<Utc>,
    ) -> Result<Vec<ReservationDetail>, DbErr> {
        let rows = entity::prelude::Reservation::find()
            .find_also_related(entity::prelude::Room)
            .filter(entity::reservation::Column::UserLogin.eq(user.login.as_str()))
            .filter(entity::reservation::Column::Beginning.gte(from))
            .order_by_asc(entity::reservation::Column::Beginning)
            .all(self.db)
            .await?;

        let mut details = Vec::with_capacity(rows.len());
        for (reservation, room) in rows {
            let Some(room) = room else {
                return Err(DbErr::RecordNotFound(format!(
                    "room {} referenced by reservation {} not found",
                    reservation.room_id, reservation.id
                )));
            };

            details.push(ReservationDetail {
                reservation: Reservation::from_entity(reservation),
                user: user.clone(),
                room: Room::from_entity(room),
            });
        }

        Ok(details)
    }

    /// Gets all reservations ordered by beginning. Used by the diagnostic
    /// table dump.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Beginning)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }
}
