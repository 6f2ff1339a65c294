use super::*;

/// Tests walking a reservation through pickup and return.
///
/// Expected: Ok with RENTED, then FINISHED
#[tokio::test]
async fn moves_forward_through_lifecycle() -> Result<(), AppError> {
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
    let rented = service
        .change_status(reservation.id, ReservationStatus::Rented)
        .await?;
    assert_eq!(rented.status, ReservationStatus::Rented);

    let finished = service
        .change_status(reservation.id, ReservationStatus::Finished)
        .await?;
    assert_eq!(finished.status, ReservationStatus::Finished);

    Ok(())
}

/// Tests moving a finished reservation back.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_backward_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, car.id, customer.id)
        .status(ReservationStatus::Finished)
        .build()
        .await?;

    let service = ReservationService::new(db, &locks);
    let result = service
        .change_status(reservation.id, ReservationStatus::Rented)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests leaving CANCELED through a status change.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_leaving_canceled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, car.id, customer.id)
        .status(ReservationStatus::Canceled)
        .build()
        .await?;

    let service = ReservationService::new(db, &locks);
    let result = service
        .change_status(reservation.id, ReservationStatus::Reserved)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests entering CANCELED through a status change instead of cancel.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_entering_canceled() -> Result<(), AppError> {
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
    let result = service
        .change_status(reservation.id, ReservationStatus::Canceled)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests setting the current status again.
///
/// Expected: Ok with status unchanged
#[tokio::test]
async fn same_status_is_noop() -> Result<(), AppError> {
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
    let unchanged = service
        .change_status(reservation.id, ReservationStatus::Reserved)
        .await?;

    assert_eq!(unchanged.status, ReservationStatus::Reserved);

    Ok(())
}
