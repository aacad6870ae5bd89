use super::*;

/// Tests the unfiltered reservation listing.
///
/// Verifies that every reservation is returned ascending by beginning,
/// past ones included.
///
/// Expected: Ok(Vec) with both reservations in beginning order
#[tokio::test]
async fn lists_all_reservations_ordered_by_beginning() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    let now = Utc::now();

    let future = factory::reservation::ReservationFactory::new(db, &user.login, room.room_id)
        .beginning(now + Duration::hours(1))
        .end(now + Duration::hours(2))
        .build()
        .await?;
    let past = factory::reservation::ReservationFactory::new(db, &user.login, room.room_id)
        .beginning(now - Duration::days(1))
        .end(now - Duration::days(1) + Duration::hours(1))
        .build()
        .await?;

    let reservations = ReservationRepository::new(db).get_all().await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, past.id);
    assert_eq!(reservations[1].id, future.id);

    Ok(())
}
