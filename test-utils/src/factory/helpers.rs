//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities with
//! their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation together with its user and room.
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, room, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let room = crate::factory::room::create_room(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, &user.login, room.room_id).await?;

    Ok((user, room, reservation))
}

/// Creates a reservation for a specific user, creating a fresh room for it.
///
/// Useful when a test needs several reservations held by the same user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User entity that holds the reservation
///
/// # Returns
/// - `Ok((room, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::room::Model, entity::reservation::Model), DbErr> {
    let room = crate::factory::room::create_room(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, &user.login, room.room_id).await?;

    Ok((room, reservation))
}
