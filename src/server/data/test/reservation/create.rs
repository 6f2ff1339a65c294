use super::*;

/// Tests creating a reservation.
///
/// Verifies that the repository stores the car, customer, dates and amount and
/// always starts the reservation in RESERVED status.
///
/// Expected: Ok with reservation created
#[tokio::test]
async fn creates_reservation_in_reserved_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            car_id: car.id,
            customer_id: customer.id,
            start_date: date(2025, 4, 20),
            end_date: date(2025, 4, 25),
            total_amount: Decimal::new(100000, 2),
        })
        .await?;

    assert!(reservation.id > 0);
    assert_eq!(reservation.car_id, car.id);
    assert_eq!(reservation.customer_id, customer.id);
    assert_eq!(reservation.start_date, date(2025, 4, 20));
    assert_eq!(reservation.end_date, date(2025, 4, 25));
    assert_eq!(reservation.total_amount, Decimal::new(100000, 2));
    assert_eq!(reservation.status, ReservationStatus::Reserved);

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a reservation for a car that does not exist.
///
/// Verifies that the foreign key on car_id rejects the insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_nonexistent_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParams {
            car_id: 999_999,
            customer_id: customer.id,
            start_date: date(2025, 4, 20),
            end_date: date(2025, 4, 25),
            total_amount: Decimal::new(100000, 2),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
