use super::*;

/// Tests looking up credentials by email.
///
/// Expected: Ok(Some) with the stored password
#[tokio::test]
async fn finds_credentials_for_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("ana@x.com")
        .password("legacy")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("ana@x.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password, "legacy");

    Ok(())
}

/// Tests looking up an email no user has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("nobody@x.com")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}

/// Tests replacing a stored credential.
///
/// Expected: Ok with the new value stored
#[tokio::test]
async fn updates_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password("legacy")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "$argon2id$new".to_string())
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "$argon2id$new");

    Ok(())
}
