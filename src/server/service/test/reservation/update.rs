use super::*;

fn reschedule(
    id: i32,
    car_id: i32,
    customer_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> UpdateReservationParams {
    UpdateReservationParams {
        id,
        car_id,
        customer_id,
        start_date,
        end_date,
        total_amount: Decimal::new(150000, 2),
    }
}

/// Tests moving a reservation to free dates.
///
/// Expected: Ok with new dates and amount
#[tokio::test]
async fn reschedules_to_free_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (car, customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db, &locks);
    let updated = service
        .update(reschedule(
            reservation.id,
            car.id,
            customer.id,
            date(2025, 9, 1),
            date(2025, 9, 3),
        ))
        .await?;

    assert_eq!(updated.start_date, date(2025, 9, 1));
    assert_eq!(updated.end_date, date(2025, 9, 3));
    assert_eq!(updated.total_amount, Decimal::new(150000, 2));
    assert_eq!(updated.status, ReservationStatus::Reserved);

    Ok(())
}

/// Tests extending a reservation over its own dates.
///
/// The reservation must not conflict with itself.
///
/// Expected: Ok
#[tokio::test]
async fn allows_overlap_with_itself() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 4, 20), date(2025, 4, 25))
        .build()
        .await?;

    let service = ReservationService::new(db, &locks);
    let updated = service
        .update(reschedule(
            reservation.id,
            car.id,
            customer.id,
            date(2025, 4, 18),
            date(2025, 4, 27),
        ))
        .await?;

    assert_eq!(updated.start_date, date(2025, 4, 18));
    assert_eq!(updated.end_date, date(2025, 4, 27));

    Ok(())
}

/// Tests moving a reservation onto another booking of the same car.
///
/// Expected: Err(AppError::Conflict) and the reservation left unchanged
#[tokio::test]
async fn rejects_overlap_with_other_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 4, 1), date(2025, 4, 5))
        .build()
        .await?;
    ReservationFactory::new(db, car.id, customer.id)
        .dates(date(2025, 4, 10), date(2025, 4, 15))
        .build()
        .await?;

    let service = ReservationService::new(db, &locks);
    let result = service
        .update(reschedule(
            reservation.id,
            car.id,
            customer.id,
            date(2025, 4, 4),
            date(2025, 4, 12),
        ))
        .await;

    assert_conflict(result, CAR_ALREADY_BOOKED);

    let stored = service.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.start_date, date(2025, 4, 1));
    assert_eq!(stored.end_date, date(2025, 4, 5));

    Ok(())
}

/// Tests updating a canceled reservation.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_canceled_reservation() -> Result<(), AppError> {
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
        .update(reschedule(
            reservation.id,
            car.id,
            customer.id,
            date(2025, 9, 1),
            date(2025, 9, 3),
        ))
        .await;

    assert_conflict(result, CANNOT_UPDATE_CANCELED);

    Ok(())
}

/// Tests moving a reservation to another car.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_car_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (_car, customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_car = factory::create_car(db).await?;

    let service = ReservationService::new(db, &locks);
    let result = service
        .update(reschedule(
            reservation.id,
            other_car.id,
            customer.id,
            reservation.start_date,
            reservation.end_date,
        ))
        .await;

    assert_conflict(result, CANNOT_CHANGE_CAR_OR_CUSTOMER);

    Ok(())
}

/// Tests handing a reservation to another customer.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_customer_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (car, _customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_customer = factory::create_customer(db).await?;

    let service = ReservationService::new(db, &locks);
    let result = service
        .update(reschedule(
            reservation.id,
            car.id,
            other_customer.id,
            reservation.start_date,
            reservation.end_date,
        ))
        .await;

    assert_conflict(result, CANNOT_CHANGE_CAR_OR_CUSTOMER);

    Ok(())
}

/// Tests updating a reservation that does not exist.
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

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let service = ReservationService::new(db, &locks);
    let result = service
        .update(reschedule(
            999_999,
            car.id,
            customer.id,
            date(2025, 9, 1),
            date(2025, 9, 3),
        ))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
