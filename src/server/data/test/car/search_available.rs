use super::*;

/// Tests filtering cars by producer and model.
///
/// Expected: Ok with only the matching car
#[tokio::test]
async fn filters_by_producer_and_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = CarFactory::new(db)
        .producer("Ford")
        .model("Focus")
        .build()
        .await?;
    CarFactory::new(db)
        .producer("Ford")
        .model("Mondeo")
        .build()
        .await?;
    CarFactory::new(db)
        .producer("Opel")
        .model("Focus")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo
        .search_available(
            CarSearchParams {
                producer: Some("Ford".to_string()),
                model: Some("Focus".to_string()),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(cars[0].id, target.id);

    Ok(())
}

/// Tests excluding cars booked during the requested range.
///
/// A car with an overlapping reservation is excluded, a car whose only
/// overlapping reservation is canceled is kept, and a car booked outside the
/// range is kept.
///
/// Expected: Ok with the two free cars
#[tokio::test]
async fn excludes_cars_booked_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let booked = factory::create_car(db).await?;
    let canceled = factory::create_car(db).await?;
    let booked_later = factory::create_car(db).await?;

    ReservationFactory::new(db, booked.id, customer.id)
        .dates(date(2025, 4, 18), date(2025, 4, 21))
        .build()
        .await?;
    ReservationFactory::new(db, canceled.id, customer.id)
        .dates(date(2025, 4, 20), date(2025, 4, 25))
        .status(ReservationStatus::Canceled)
        .build()
        .await?;
    ReservationFactory::new(db, booked_later.id, customer.id)
        .dates(date(2025, 4, 26), date(2025, 4, 30))
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo
        .search_available(
            CarSearchParams {
                start_date: Some(date(2025, 4, 20)),
                end_date: Some(date(2025, 4, 25)),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        cars.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![canceled.id, booked_later.id]
    );

    Ok(())
}

/// Tests that a single date does not filter by availability.
///
/// Expected: Ok with every car
#[tokio::test]
async fn ignores_incomplete_date_range() -> Result<(), DbErr> {
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

    let repo = CarRepository::new(db);
    let (cars, _) = repo
        .search_available(
            CarSearchParams {
                start_date: Some(date(2025, 4, 20)),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(cars.len(), 1);

    Ok(())
}
