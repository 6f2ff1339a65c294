use super::*;

/// Tests locking a car inside a transaction.
///
/// Verifies that the car is returned and that the transaction can still write
/// and commit afterwards.
///
/// Expected: Ok(Some(car))
#[tokio::test]
async fn returns_car_inside_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let txn = db.begin().await?;
    let locked = CarRepository::new(&txn).find_for_update(car.id).await?;
    assert_eq!(locked.as_ref().map(|c| c.id), Some(car.id));

    CarRepository::new(&txn)
        .update(UpdateCarParams {
            id: car.id,
            producer: car.producer.clone(),
            model: car.model.clone(),
            year_of_production: car.year_of_production,
            registration_number: car.registration_number.clone(),
            price_per_day: Decimal::new(999, 0),
        })
        .await?;
    txn.commit().await?;

    let stored = CarRepository::new(db).get_by_id(car.id).await?.unwrap();
    assert_eq!(stored.price_per_day, Decimal::new(999, 0));

    Ok(())
}

/// Tests locking a car that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    let locked = CarRepository::new(&txn).find_for_update(999_999).await?;
    txn.rollback().await?;

    assert!(locked.is_none());

    Ok(())
}
