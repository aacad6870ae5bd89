use super::*;

/// Tests finding an existing user by login.
///
/// Verifies that the repository successfully retrieves a user record
/// when queried with a login that exists in the database.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .login("alice")
        .full_name("Alice Martin")
        .adherent(true)
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_login("alice").await?;

    let user = result.unwrap();
    assert_eq!(user.login, "alice");
    assert_eq!(user.full_name, "Alice Martin");
    assert!(user.adherent);
    assert!(!user.admin);

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Verifies that the repository returns None when queried with a login
/// that does not exist in the database.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_by_login("ghost").await?;

    assert!(result.is_none());

    Ok(())
}
