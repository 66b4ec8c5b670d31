use super::*;

/// Tests updating a car in place.
///
/// Expected: Ok(Some) with new fields and the original owner
#[tokio::test]
async fn updates_car_keeping_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;

    let updated = CarRepository::new(db)
        .update(UpdateCarParams {
            id: car.id,
            brand: "Honda".to_string(),
            model: "Fit".to_string(),
            year: 2018,
            plate: Some("XYZ-987".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.user_id, owner.id);
    assert_eq!(updated.user_name, owner.name);
    assert_eq!(updated.brand, "Honda");
    assert_eq!(updated.year, 2018);
    assert_eq!(updated.plate.as_deref(), Some("XYZ-987"));

    Ok(())
}

/// Tests updating a car that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CarRepository::new(db)
        .update(UpdateCarParams {
            id: 7,
            brand: "Honda".to_string(),
            model: "Fit".to_string(),
            year: 2018,
            plate: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
