use super::*;

/// Tests finding a room together with its attached instruments.
///
/// Verifies that the query joins through the room-instrument association
/// and returns every attached instrument.
///
/// Expected: Ok(Some((room, instruments))) with two instruments
#[tokio::test]
async fn returns_room_with_attached_instruments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let piano = factory::instrument::create_instrument_with_name(db, "Piano").await?;
    let amp = factory::instrument::create_instrument_with_name(db, "Amplifier").await?;

    let joins = RoomInstrumentRepository::new(db);
    joins.add(room.room_id, piano.id).await?;
    joins.add(room.room_id, amp.id).await?;

    let (found, instruments) = RoomRepository::new(db)
        .find_with_instruments(room.room_id)
        .await?
        .unwrap();

    assert_eq!(found.room_id, room.room_id);
    assert_eq!(instruments.len(), 2);

    Ok(())
}

/// Tests finding a room with no attached instruments.
///
/// Expected: Ok(Some((room, instruments))) with an empty instrument list
#[tokio::test]
async fn returns_empty_list_for_bare_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let (found, instruments) = RoomRepository::new(db)
        .find_with_instruments(room.room_id)
        .await?
        .unwrap();

    assert_eq!(found.room_id, room.room_id);
    assert!(instruments.is_empty());

    Ok(())
}

/// Tests querying a non-existent room.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomRepository::new(db).find_with_instruments(99999).await?;

    assert!(result.is_none());

    Ok(())
}
