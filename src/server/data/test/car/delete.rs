use super::*;

/// Tests deleting a car.
///
/// Expected: Ok(true) and the car is gone
#[tokio::test]
async fn deletes_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let deleted = repo.delete(car.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(car.id).await?.is_none());

    Ok(())
}

/// Tests deleting a car that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let deleted = repo.delete(999_999).await?;

    assert!(!deleted);

    Ok(())
}
