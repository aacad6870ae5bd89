use super::*;

/// Tests granting both role flags.
///
/// Verifies that the flag pair is replaced as a whole and persisted.
///
/// Expected: Ok(Some(User)) with both flags set
#[tokio::test]
async fn grants_both_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_login(db, "alice").await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .set_rights(
            "alice",
            UpdateUserRightsParam {
                adherent: true,
                admin: true,
            },
        )
        .await?
        .unwrap();

    assert!(updated.adherent);
    assert!(updated.admin);

    let reloaded = repo.find_by_login("alice").await?.unwrap();
    assert!(reloaded.adherent);
    assert!(reloaded.admin);

    Ok(())
}

/// Tests revoking a flag through the full replace.
///
/// A request carrying `admin: false` must clear a previously granted
/// admin flag rather than leave it alone.
///
/// Expected: Ok(Some(User)) with admin cleared and adherent kept
#[tokio::test]
async fn revokes_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .login("alice")
        .adherent(true)
        .admin(true)
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .set_rights(
            "alice",
            UpdateUserRightsParam {
                adherent: true,
                admin: false,
            },
        )
        .await?
        .unwrap();

    assert!(updated.adherent);
    assert!(!updated.admin);

    Ok(())
}

/// Tests updating the rights of a non-existent user.
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
        .set_rights(
            "ghost",
            UpdateUserRightsParam {
                adherent: true,
                admin: false,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
