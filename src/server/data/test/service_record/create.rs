use super::*;

/// Tests creating a service record for an existing car.
///
/// Expected: Ok(Some) with the record stored
#[tokio::test]
async fn creates_record_for_existing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let record = ServiceRecordRepository::new(db)
        .create(CreateServiceRecordParams {
            car_id: car.id,
            fields: fields("2024-05-01"),
        })
        .await?
        .unwrap();

    assert_eq!(record.car_id, car.id);
    assert_eq!(record.service_type, "Brake pads");
    assert_eq!(record.mileage, 42000);
    assert_eq!(record.cost, 180.0);

    Ok(())
}

/// Tests creating a service record for a car that does not exist.
///
/// Expected: Ok(None) with no rows inserted
#[tokio::test]
async fn inserts_nothing_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let record = ServiceRecordRepository::new(db)
        .create(CreateServiceRecordParams {
            car_id: 99,
            fields: fields("2024-05-01"),
        })
        .await?;

    assert!(record.is_none());
    assert_eq!(entity::prelude::ServiceRecord::find().count(db).await?, 0);

    Ok(())
}
