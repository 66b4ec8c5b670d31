use super::*;

/// Tests creating a car for an existing user.
///
/// Expected: Ok(Some) with the owner's name joined in
#[tokio::test]
async fn creates_car_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Ana")
        .build()
        .await?;

    let car = CarRepository::new(db)
        .create(CreateCarParams {
            user_id: user.id,
            brand: "Toyota".to_string(),
            model: "Yaris".to_string(),
            year: 2020,
            plate: None,
        })
        .await?
        .unwrap();

    assert_eq!(car.user_id, user.id);
    assert_eq!(car.user_name, "Ana");
    assert_eq!(car.brand, "Toyota");
    assert_eq!(car.plate, None);

    Ok(())
}

/// Tests creating a car for a user that does not exist.
///
/// Verifies that the owner check fails inside the transaction and nothing is
/// inserted.
///
/// Expected: Ok(None) with no car rows
#[tokio::test]
async fn inserts_nothing_for_missing_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = CarRepository::new(db)
        .create(CreateCarParams {
            user_id: 99,
            brand: "Toyota".to_string(),
            model: "Yaris".to_string(),
            year: 2020,
            plate: Some("ABC-123".to_string()),
        })
        .await?;

    assert!(car.is_none());
    assert_eq!(entity::prelude::Car::find().count(db).await?, 0);

    Ok(())
}
