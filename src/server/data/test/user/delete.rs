use super::*;

/// Tests deleting a user who owns cars with history and documents.
///
/// Verifies that the cascading foreign keys remove the user's cars and, through
/// them, their service records and documents.
///
/// Expected: Ok(true) with every dependent row removed
#[tokio::test]
async fn deletes_user_and_cascades_to_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car) = factory::helpers::create_car_with_owner(db).await?;
    factory::service_record::create_service_record(db, car.id).await?;
    factory::car_document::create_car_document(db, car.id).await?;

    // Another owner's data must survive
    let (_, other_car) = factory::helpers::create_car_with_owner(db).await?;
    factory::service_record::create_service_record(db, other_car.id).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Car::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ServiceRecord::find().count(db).await?, 1);
    assert_eq!(entity::prelude::CarDocument::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting the same user twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn reports_missing_user_on_second_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert!(!repo.exists(user.id).await?);

    Ok(())
}
