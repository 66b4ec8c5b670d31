use super::*;

/// Tests resolving an anonymous session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn resolves_anonymous_session_to_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth = AuthGuard::new(db, session).resolve().await?;

    assert!(auth.is_none());

    Ok(())
}

/// Tests resolving a session bound to an existing user.
///
/// Verifies that name and email come from the current user row rather than the
/// copy stored in the session at login.
///
/// Expected: Ok(Some) with the fresh user data
#[tokio::test]
async fn resolves_bound_user_from_fresh_row() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Ana")
        .email("ana@x.com")
        .build()
        .await?;

    AuthSession::new(session)
        .establish(&User {
            id: user.id,
            name: "Stale Name".to_string(),
            email: "stale@x.com".to_string(),
        })
        .await?;

    let auth = AuthGuard::new(db, session).resolve().await?.unwrap();

    assert_eq!(auth.user_id, user.id);
    assert_eq!(auth.name, "Ana");
    assert_eq!(auth.email, "ana@x.com");

    Ok(())
}

/// Tests resolving a session whose user has been deleted.
///
/// Expected: Ok(None) with the session binding removed
#[tokio::test]
async fn clears_session_of_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session
        .establish(&User {
            id: 77,
            name: "Gone".to_string(),
            email: "gone@x.com".to_string(),
        })
        .await?;

    let auth = AuthGuard::new(db, session).resolve().await?;

    assert!(auth.is_none());
    assert!(auth_session.get_user().await?.is_none());

    Ok(())
}
