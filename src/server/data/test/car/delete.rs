use super::*;

/// Tests deleting a car with history and documents.
///
/// Expected: Ok(true) with the car's service records and documents removed
#[tokio::test]
async fn deletes_car_and_cascades_to_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    factory::service_record::create_service_record(db, car.id).await?;
    factory::service_record::create_service_record(db, car.id).await?;
    factory::car_document::create_car_document(db, car.id).await?;

    let deleted = CarRepository::new(db).delete(car.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ServiceRecord::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CarDocument::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a car id that never existed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CarRepository::new(db).delete(404).await?);

    Ok(())
}
