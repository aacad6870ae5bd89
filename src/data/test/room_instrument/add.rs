use super::*;

/// Tests attaching an instrument to a room.
///
/// Expected: Ok(()) and one attached instrument
#[tokio::test]
async fn creates_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let piano = factory::instrument::create_instrument_with_name(db, "Piano").await?;

    RoomInstrumentRepository::new(db)
        .add(room.room_id, piano.id)
        .await?;

    let (_, instruments) = RoomRepository::new(db)
        .find_with_instruments(room.room_id)
        .await?
        .unwrap();

    assert_eq!(instruments.len(), 1);
    assert_eq!(instruments[0].name, "Piano");

    Ok(())
}

/// Tests attaching the same instrument twice.
///
/// Expected: Ok(()) both times and still one attached instrument
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let instrument = factory::instrument::create_instrument(db).await?;

    let repo = RoomInstrumentRepository::new(db);
    repo.add(room.room_id, instrument.id).await?;
    repo.add(room.room_id, instrument.id).await?;

    let (_, instruments) = RoomRepository::new(db)
        .find_with_instruments(room.room_id)
        .await?
        .unwrap();

    assert_eq!(instruments.len(), 1);

    Ok(())
}
