use super::*;

/// Tests the ordering of a car's service history.
///
/// Verifies records are ordered by service date descending, with the id breaking
/// ties between records on the same date.
///
/// Expected: Ok with records in history order
#[tokio::test]
async fn orders_by_date_then_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let oldest = factory::service_record::ServiceRecordFactory::new(db, car.id)
        .service_date("2023-01-10")
        .build()
        .await?;
    let newest = factory::service_record::ServiceRecordFactory::new(db, car.id)
        .service_date("2024-06-01")
        .build()
        .await?;
    let same_day_first = factory::service_record::ServiceRecordFactory::new(db, car.id)
        .service_date("2023-08-15")
        .build()
        .await?;
    let same_day_second = factory::service_record::ServiceRecordFactory::new(db, car.id)
        .service_date("2023-08-15")
        .build()
        .await?;

    let records = ServiceRecordRepository::new(db).get_by_car(car.id).await?;
    let ids: Vec<i32> = records.iter().map(|r| r.id).collect();

    assert_eq!(
        ids,
        vec![newest.id, same_day_second.id, same_day_first.id, oldest.id]
    );

    Ok(())
}

/// Tests that another car's records are not included.
///
/// Expected: Ok with only the requested car's records
#[tokio::test]
async fn excludes_other_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let (_, other) = factory::helpers::create_car_with_owner(db).await?;
    factory::service_record::create_service_record(db, car.id).await?;
    factory::service_record::create_service_record(db, other.id).await?;

    let repo = ServiceRecordRepository::new(db);

    assert_eq!(repo.get_by_car(car.id).await?.len(), 1);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
