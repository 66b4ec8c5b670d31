use super::*;

/// Tests listing cars.
///
/// Expected: Ok with cars newest first, each joined with its owner's name
#[tokio::test]
async fn lists_cars_newest_first_with_owner() -> Result<(), DbErr> {
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
    let luis = factory::user::UserFactory::new(db)
        .name("Luis")
        .build()
        .await?;
    let first = factory::car::create_car(db, ana.id).await?;
    let second = factory::car::create_car(db, luis.id).await?;

    let cars = CarRepository::new(db).get_all().await?;

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].id, second.id);
    assert_eq!(cars[0].user_name, "Luis");
    assert_eq!(cars[1].id, first.id);
    assert_eq!(cars[1].user_name, "Ana");

    Ok(())
}

/// Tests listing the cars of a single owner.
///
/// Expected: Ok with only that owner's cars
#[tokio::test]
async fn lists_cars_of_one_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_garage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    factory::helpers::create_car_with_owner(db).await?;

    let cars = CarRepository::new(db).get_by_user(owner.id).await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, car.id);

    Ok(())
}

/// Tests fetching a car that does not exist.
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

    let repo = CarRepository::new(db);

    assert!(repo.get_by_id(1).await?.is_none());
    assert!(!repo.exists(1).await?);

    Ok(())
}
