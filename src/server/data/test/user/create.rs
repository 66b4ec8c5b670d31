use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores the given credential verbatim and returns
/// the domain model without it.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "$argon2id$stub".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "$argon2id$stub");

    Ok(())
}

/// Tests creating a user with an email that is already taken.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ana@x.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Ana2".to_string(),
            email: "ana@x.com".to_string(),
            password: "p2".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests listing users.
///
/// Expected: Ok with users ordered newest first
#[tokio::test]
async fn lists_users_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, second.id);
    assert_eq!(users[1].id, first.id);

    Ok(())
}
