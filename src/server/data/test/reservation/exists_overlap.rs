use super::*;

/// Tests that a range sharing days with a reservation overlaps.
///
/// Verifies the partial overlap case from both sides of an existing
/// reservation for 2025-04-20..2025-04-25.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_partial_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 4, 20), date(2025, 4, 25))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(
        repo.exists_overlap(car.id, date(2025, 4, 24), date(2025, 4, 30))
            .await?
    );
    assert!(
        repo.exists_overlap(car.id, date(2025, 4, 15), date(2025, 4, 20))
            .await?
    );
    assert!(
        repo.exists_overlap(car.id, date(2025, 4, 21), date(2025, 4, 22))
            .await?
    );
    assert!(
        repo.exists_overlap(car.id, date(2025, 4, 1), date(2025, 4, 30))
            .await?
    );

    Ok(())
}

/// Tests that ranges ending before or starting after a reservation do not overlap.
///
/// Intervals are closed, so touching the boundary counts as overlap while the
/// day after the end does not.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_disjoint_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 4, 20), date(2025, 4, 25))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(
        !repo
            .exists_overlap(car.id, date(2025, 4, 26), date(2025, 4, 30))
            .await?
    );
    assert!(
        !repo
            .exists_overlap(car.id, date(2025, 4, 10), date(2025, 4, 19))
            .await?
    );

    Ok(())
}

/// Tests that canceled reservations never block a range.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_canceled_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 4, 20), date(2025, 4, 25))
        .status(ReservationStatus::Canceled)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let overlaps = repo
        .exists_overlap(car.id, date(2025, 4, 20), date(2025, 4, 25))
        .await?;

    assert!(!overlaps);

    Ok(())
}

/// Tests that rented and finished reservations still block a range.
///
/// Expected: Ok(true)
#[tokio::test]
async fn counts_rented_and_finished_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 4, 1), date(2025, 4, 5))
        .status(ReservationStatus::Rented)
        .build()
        .await?;
    ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 3, 1), date(2025, 3, 5))
        .status(ReservationStatus::Finished)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(
        repo.exists_overlap(car.id, date(2025, 4, 5), date(2025, 4, 6))
            .await?
    );
    assert!(
        repo.exists_overlap(car.id, date(2025, 3, 3), date(2025, 3, 3))
            .await?
    );

    Ok(())
}

/// Tests that reservations of other cars are not considered.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_other_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let other_car = factory::create_car(db).await?;
    ReservationFactory::new(db, other_car.id, customer.id)
        .dates(date(2025, 4, 20), date(2025, 4, 25))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let overlaps = repo
        .exists_overlap(car.id, date(2025, 4, 20), date(2025, 4, 25))
        .await?;

    assert!(!overlaps);

    Ok(())
}
