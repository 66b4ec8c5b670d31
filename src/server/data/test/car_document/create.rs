use super::*;

/// Tests creating a document for an existing car.
///
/// Expected: Ok(Some) with the document stored
#[tokio::test]
async fn creates_document_for_existing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let document = CarDocumentRepository::new(db)
        .create(CreateCarDocumentParams {
            car_id: car.id,
            fields: CarDocumentFields {
                document_type: "Registration".to_string(),
                folio: "REG-1".to_string(),
                expiration_date: "2026-03-31".to_string(),
                notes: Some("Original in glovebox".to_string()),
            },
        })
        .await?
        .unwrap();

    assert_eq!(document.car_id, car.id);
    assert_eq!(document.folio, "REG-1");
    assert_eq!(document.notes.as_deref(), Some("Original in glovebox"));

    Ok(())
}

/// Tests creating a document for a car that does not exist.
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

    let document = CarDocumentRepository::new(db)
        .create(CreateCarDocumentParams {
            car_id: 12,
            fields: CarDocumentFields {
                document_type: "Insurance".to_string(),
                folio: "INS-1".to_string(),
                expiration_date: "2026-03-31".to_string(),
                notes: None,
            },
        })
        .await?;

    assert!(document.is_none());
    assert_eq!(entity::prelude::CarDocument::find().count(db).await?, 0);

    Ok(())
}
