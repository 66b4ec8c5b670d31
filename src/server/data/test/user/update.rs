use super::*;

/// Tests updating a user's name and email.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            name: "Renamed".to_string(),
            email: "renamed@x.com".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, "renamed@x.com");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: 42,
            name: "Ghost".to_string(),
            email: "ghost@x.com".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests moving a user onto another user's email.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn fails_on_email_taken_by_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@x.com")
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;

    let err = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            name: user.name,
            email: "taken@x.com".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
