use super::*;

/// Tests creating a car.
///
/// Expected: Ok with car created and all fields persisted
#[tokio::test]
async fn creates_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo
        .create(CreateCarParams {
            producer: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year_of_production: 2021,
            registration_number: "WX12345".to_string(),
            price_per_day: Decimal::new(15050, 2),
        })
        .await?;

    assert!(car.id > 0);
    assert_eq!(car.producer, "Toyota");
    assert_eq!(car.registration_number, "WX12345");
    assert_eq!(car.price_per_day, Decimal::new(15050, 2));

    let stored = repo.get_by_id(car.id).await?;
    assert_eq!(stored, Some(car));

    Ok(())
}

/// Tests that the unique index rejects a duplicate registration number.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_registration_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let result = repo
        .create(CreateCarParams {
            producer: "Toyota".to_string(),
            model: "Yaris".to_string(),
            year_of_production: 2020,
            registration_number: existing.registration_number,
            price_per_day: Decimal::new(100, 0),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
