use super::*;

/// Tests listing all users ordered by login.
///
/// Verifies that every user is returned and that the listing is sorted
/// by login ascending regardless of insertion order.
///
/// Expected: Ok(Vec) with users in login order
#[tokio::test]
async fn lists_all_users_ordered_by_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_login(db, "carol").await?;
    factory::user::create_user_with_login(db, "alice").await?;
    factory::user::create_user_with_login(db, "bob").await?;

    let users = UserRepository::new(db).get_all_with_instruments().await?;

    let logins: Vec<&str> = users.iter().map(|(u, _)| u.login.as_str()).collect();
    assert_eq!(logins, vec!["alice", "bob", "carol"]);

    Ok(())
}

/// Tests that the listing carries each user's instruments.
///
/// Expected: Ok(Vec) where only the equipped user has instruments
#[tokio::test]
async fn includes_instruments_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user_with_login(db, "alice").await?;
    factory::user::create_user_with_login(db, "bob").await?;
    let bass = factory::instrument::create_instrument_with_name(db, "Bass").await?;

    UserInstrumentRepository::new(db).add(&alice.login, bass.id).await?;

    let users = UserRepository::new(db).get_all_with_instruments().await?;

    assert_eq!(users.len(), 2);
    let (_, alice_instruments) = &users[0];
    let (_, bob_instruments) = &users[1];
    assert_eq!(alice_instruments.len(), 1);
    assert_eq!(alice_instruments[0].name, "Bass");
    assert!(bob_instruments.is_empty());

    Ok(())
}

/// Tests listing when no users exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all_with_instruments().await?;

    assert!(users.is_empty());

    Ok(())
}
