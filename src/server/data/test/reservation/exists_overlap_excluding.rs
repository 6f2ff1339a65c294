use super::*;

/// Tests that a reservation does not conflict with itself.
///
/// Verifies that rescheduling checks skip the reservation being changed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, _customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let overlaps = repo
        .exists_overlap_excluding(
            car.id,
            reservation.start_date,
            reservation.end_date,
            reservation.id,
        )
        .await?;

    assert!(!overlaps);

    Ok(())
}

/// Tests that other overlapping reservations are still detected.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_other_overlapping_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let first = ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 5, 1), date(2025, 5, 5))
        .build()
        .await?;
    ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 5, 10), date(2025, 5, 15))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let overlaps = repo
        .exists_overlap_excluding(car.id, date(2025, 5, 3), date(2025, 5, 11), first.id)
        .await?;

    assert!(overlaps);

    Ok(())
}
