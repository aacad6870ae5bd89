use super::*;

/// Tests detaching an instrument from a user.
///
/// Verifies that only the targeted association is removed.
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

    let user = factory::user::create_user(db).await?;
    let guitar = factory::instrument::create_instrument_with_name(db, "Guitar").await?;
    let drums = factory::instrument::create_instrument_with_name(db, "Drums").await?;

    let repo = UserInstrumentRepository::new(db);
    repo.add(&user.login, guitar.id).await?;
    repo.add(&user.login, drums.id).await?;

    repo.remove(&user.login, guitar.id).await?;

    let (_, instruments) = UserRepository::new(db)
        .find_with_instruments(&user.login)
        .await?
        .unwrap();

    assert_eq!(instruments.len(), 1);
    assert_eq!(instruments[0].name, "Drums");

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

    let user = factory::user::create_user(db).await?;
    let instrument = factory::instrument::create_instrument(db).await?;

    UserInstrumentRepository::new(db)
        .remove(&user.login, instrument.id)
        .await?;

    let (_, instruments) = UserRepository::new(db)
        .find_with_instruments(&user.login)
        .await?
        .unwrap();

    assert!(instruments.is_empty());

    Ok(())
}
