use super::*;

/// Tests updating a document and listing the car's documents.
///
/// Expected: Ok(Some) with updated fields, visible through `get_by_car`
#[tokio::test]
async fn updates_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let document = factory::car_document::create_car_document(db, car.id).await?;

    let repo = CarDocumentRepository::new(db);
    let updated = repo
        .update(UpdateCarDocumentParams {
            id: document.id,
            fields: CarDocumentFields {
                document_type: "Inspection".to_string(),
                folio: "INSP-7".to_string(),
                expiration_date: "2025-06-30".to_string(),
                notes: None,
            },
        })
        .await?
        .unwrap();

    assert_eq!(updated.document_type, "Inspection");

    let documents = repo.get_by_car(car.id).await?;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].folio, "INSP-7");

    Ok(())
}

/// Tests deleting a document twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn reports_missing_document_on_second_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let document = factory::car_document::create_car_document(db, car.id).await?;

    let repo = CarDocumentRepository::new(db);

    assert!(repo.delete(document.id).await?);
    assert!(!repo.delete(document.id).await?);

    Ok(())
}
