use super::actor;
use crate::server::{
    error::AppError,
    model::document::{CarDocumentFields, CreateCarDocumentParams},
    service::document::CarDocumentService,
};
use test_utils::{builder::TestBuilder, factory};

fn fields() -> CarDocumentFields {
    CarDocumentFields {
        document_type: "Insurance".to_string(),
        folio: "INS-42".to_string(),
        expiration_date: "2025-12-31".to_string(),
        notes: None,
    }
}

/// Tests attaching a document to a missing car.
///
/// Expected: Err(NotFound("Car not found"))
#[tokio::test]
async fn reports_missing_car_on_create() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = actor();
    let result = CarDocumentService::new(db, &auth)
        .create(CreateCarDocumentParams {
            car_id: 8,
            fields: fields(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a document shows up in both the per-car list and the overview.
///
/// Expected: Ok with the document in both views
#[tokio::test]
async fn lists_document_per_car_and_globally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;

    let auth = actor();
    let service = CarDocumentService::new(db, &auth);
    let document = service
        .create(CreateCarDocumentParams {
            car_id: car.id,
            fields: fields(),
        })
        .await?;

    let per_car = service.get_by_car(car.id).await?;
    assert_eq!(per_car.len(), 1);
    assert_eq!(per_car[0].id, document.id);

    let overview = service.get_overview().await?;
    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0].owner_name, owner.name);
    assert_eq!(overview[0].brand, car.brand);

    assert!(matches!(
        service.get_by_car(car.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
