use super::*;

/// Tests a partial room update.
///
/// Verifies that only fields present in the parameter are written and
/// absent fields keep their stored value.
///
/// Expected: Ok(Some(Room)) with capacity changed and purpose untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .capacity(4)
        .purpose("Rehearsal")
        .build()
        .await?;

    let updated = RoomRepository::new(db)
        .update(
            room.room_id,
            UpdateRoomParam {
                capacity: Some(10),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.capacity, 10);
    assert_eq!(updated.purpose, "Rehearsal");
    assert_eq!(updated.photo_path, room.photo_path);
    assert_eq!(updated.restricted, room.restricted);

    Ok(())
}

/// Tests updating every room field at once.
///
/// Expected: Ok(Some(Room)) with all fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let updated = RoomRepository::new(db)
        .update(
            room.room_id,
            UpdateRoomParam {
                capacity: Some(8),
                photo_path: Some("/photos/studio.jpg".to_string()),
                purpose: Some("Recording studio".to_string()),
                restricted: Some(true),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.capacity, 8);
    assert_eq!(updated.photo_path, "/photos/studio.jpg");
    assert_eq!(updated.purpose, "Recording studio");
    assert!(updated.restricted);

    Ok(())
}

/// Tests toggling the restricted flag off.
///
/// `Some(false)` must clear the flag; only `None` means "leave alone".
///
/// Expected: Ok(Some(Room)) with restricted cleared
#[tokio::test]
async fn clears_restricted_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db).restricted(true).build().await?;

    let updated = RoomRepository::new(db)
        .update(
            room.room_id,
            UpdateRoomParam {
                restricted: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(!updated.restricted);

    Ok(())
}

/// Tests updating a non-existent room.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomRepository::new(db)
        .update(
            99999,
            UpdateRoomParam {
                capacity: Some(10),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
