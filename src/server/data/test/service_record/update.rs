use super::*;

/// Tests updating and then deleting a service record.
///
/// Expected: Ok(Some) on update, Ok(true) on the first delete and Ok(false) after
#[tokio::test]
async fn updates_then_deletes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let record = factory::service_record::create_service_record(db, car.id).await?;

    let repo = ServiceRecordRepository::new(db);
    let updated = repo
        .update(UpdateServiceRecordParams {
            id: record.id,
            fields: fields("2024-09-09"),
        })
        .await?
        .unwrap();

    assert_eq!(updated.car_id, car.id);
    assert_eq!(updated.service_date, "2024-09-09");

    assert!(repo.delete(record.id).await?);
    assert!(!repo.delete(record.id).await?);
    assert!(repo.get_by_id(record.id).await?.is_none());

    Ok(())
}

/// Tests updating a record that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ServiceRecordRepository::new(db)
        .update(UpdateServiceRecordParams {
            id: 5,
            fields: fields("2024-09-09"),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
