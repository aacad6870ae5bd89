use super::*;

/// Tests overwriting a user's telephone number.
///
/// Verifies that the new number is persisted and every other field is
/// left untouched.
///
/// Expected: Ok(Some(User)) with the new telephone
#[tokio::test]
async fn overwrites_telephone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .login("alice")
        .telephone("0600000000")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update_telephone("alice", "0711111111".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.telephone, "0711111111");
    assert_eq!(updated.full_name, user.full_name);
    assert_eq!(updated.mail, user.mail);

    Ok(())
}

/// Tests updating the telephone of a non-existent user.
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

    let result = UserRepository::new(db)
        .update_telephone("ghost", "0711111111".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
