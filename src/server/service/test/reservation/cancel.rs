use super::*;

/// Tests canceling a reservation.
///
/// Expected: Ok with reservation in CANCELED status
#[tokio::test]
async fn cancels_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (_car, _customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db, &locks);
    let canceled = service.cancel(reservation.id).await?;

    assert_eq!(canceled.id, reservation.id);
    assert_eq!(canceled.status, ReservationStatus::Canceled);

    let stored = service.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Canceled);

    Ok(())
}

/// Tests canceling a reservation twice.
///
/// Expected: Ok both times, still CANCELED
#[tokio::test]
async fn repeated_cancel_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (_car, _customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db, &locks);
    service.cancel(reservation.id).await?;
    let again = service.cancel(reservation.id).await?;

    assert_eq!(again.status, ReservationStatus::Canceled);

    Ok(())
}

/// Tests canceling a reservation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let service = ReservationService::new(db, &locks);
    let result = service.cancel(999_999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
