use super::*;

/// Tests the global document overview.
///
/// Verifies every document is joined with its car's brand, model and plate and
/// the owner's name, ordered by expiration date descending then id descending.
///
/// Expected: Ok with joined documents in expiration order
#[tokio::test]
async fn joins_car_and_owner_in_expiration_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::user::UserFactory::new(db)
        .name("Ana")
        .build()
        .await?;
    let yaris = factory::car::CarFactory::new(db, ana.id)
        .brand("Toyota")
        .model("Yaris")
        .plate(Some("ABC-123".to_string()))
        .build()
        .await?;
    let luis = factory::user::UserFactory::new(db)
        .name("Luis")
        .build()
        .await?;
    let fit = factory::car::CarFactory::new(db, luis.id)
        .brand("Honda")
        .model("Fit")
        .plate(None)
        .build()
        .await?;

    let expiring_soon = factory::car_document::CarDocumentFactory::new(db, yaris.id)
        .expiration_date("2024-02-01")
        .build()
        .await?;
    let expiring_late = factory::car_document::CarDocumentFactory::new(db, fit.id)
        .expiration_date("2027-01-01")
        .build()
        .await?;
    let same_date = factory::car_document::CarDocumentFactory::new(db, yaris.id)
        .expiration_date("2024-02-01")
        .build()
        .await?;

    let overview = CarDocumentRepository::new(db).get_overview().await?;
    let ids: Vec<i32> = overview.iter().map(|d| d.document.id).collect();

    assert_eq!(ids, vec![expiring_late.id, same_date.id, expiring_soon.id]);

    assert_eq!(overview[0].brand, "Honda");
    assert_eq!(overview[0].plate, None);
    assert_eq!(overview[0].owner_name, "Luis");
    assert_eq!(overview[1].model, "Yaris");
    assert_eq!(overview[1].plate.as_deref(), Some("ABC-123"));
    assert_eq!(overview[1].owner_name, "Ana");

    Ok(())
}

/// Tests the overview with no documents.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_overview() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let overview = CarDocumentRepository::new(db).get_overview().await?;

    assert!(overview.is_empty());

    Ok(())
}
