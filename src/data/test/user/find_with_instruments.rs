use super::*;

/// Tests finding a user together with their attached instruments.
///
/// Verifies that the query joins through the user-instrument association
/// and returns every attached instrument.
///
/// Expected: Ok(Some((user, instruments))) with two instruments
#[tokio::test]
async fn returns_user_with_attached_instruments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let guitar = factory::instrument::create_instrument_with_name(db, "Guitar").await?;
    let drums = factory::instrument::create_instrument_with_name(db, "Drums").await?;

    let joins = UserInstrumentRepository::new(db);
    joins.add(&user.login, guitar.id).await?;
    joins.add(&user.login, drums.id).await?;

    let (found, instruments) = UserRepository::new(db)
        .find_with_instruments(&user.login)
        .await?
        .unwrap();

    assert_eq!(found.login, user.login);
    assert_eq!(instruments.len(), 2);

    Ok(())
}

/// Tests finding a user that plays no instrument.
///
/// Expected: Ok(Some((user, instruments))) with an empty instrument list
#[tokio::test]
async fn returns_empty_list_for_user_without_instruments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let (found, instruments) = UserRepository::new(db)
        .find_with_instruments(&user.login)
        .await?
        .unwrap();

    assert_eq!(found.login, user.login);
    assert!(instruments.is_empty());

    Ok(())
}

/// Tests querying instruments for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_with_instruments("ghost").await?;

    assert!(result.is_none());

    Ok(())
}
