use super::*;

/// Tests detaching an instrument from a room.
///
/// Expected: Ok(()) and one remaining instrument
#[tokio::test]
async fn removes_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let piano = factory::instrument::create_instrument_with_name(db, "Piano").await?;
    let amp = factory::instrument::create_instrument_with_name(db, "Amplifier").await?;

    let repo = RoomInstrumentRepository::new(db);
    repo.add(room.room_id, piano.id).await?;
    repo.add(room.room_id, amp.id).await?;

    repo.remove(room.room_id, piano.id).await?;

    let (_, instruments) = RoomRepository::new(db)
        .find_with_instruments(room.room_id)
        .await?
        .unwrap();

    assert_eq!(instruments.len(), 1);
    assert_eq!(instruments[0].name, "Amplifier");

    Ok(())
}

/// Tests detaching a never-attached instrument.
///
/// Expected: Ok(()) and no change
#[tokio::test]
async fn is_noop_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let instrument = factory::instrument::create_instrument(db).await?;

    RoomInstrumentRepository::new(db)
        .remove(room.room_id, instrument.id)
        .await?;

    let (_, instruments) = RoomRepository::new(db)
        .find_with_instruments(room.room_id)
        .await?
        .unwrap();

    assert!(instruments.is_empty());

    Ok(())
}
