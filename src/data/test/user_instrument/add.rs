use super::*;

/// Tests attaching an instrument to a user.
///
/// Verifies that the association is visible through the user query
/// after the attach.
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

    let user = factory::user::create_user(db).await?;
    let instrument = factory::instrument::create_instrument_with_name(db, "Violin").await?;

    UserInstrumentRepository::new(db)
        .add(&user.login, instrument.id)
        .await?;

    let (_, instruments) = UserRepository::new(db)
        .find_with_instruments(&user.login)
        .await?
        .unwrap();

    assert_eq!(instruments.len(), 1);
    assert_eq!(instruments[0].name, "Violin");

    Ok(())
}

/// Tests attaching the same instrument twice.
///
/// Verifies that repeating the attach does not create a duplicate
/// association row.
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

    let user = factory::user::create_user(db).await?;
    let instrument = factory::instrument::create_instrument(db).await?;

    let repo = UserInstrumentRepository::new(db);
    repo.add(&user.login, instrument.id).await?;
    repo.add(&user.login, instrument.id).await?;

    let (_, instruments) = UserRepository::new(db)
        .find_with_instruments(&user.login)
        .await?
        .unwrap();

    assert_eq!(instruments.len(), 1);

    Ok(())
}
