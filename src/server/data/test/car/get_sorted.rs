use super::*;

/// Tests sorting cars by price in both directions.
///
/// Expected: Ok with cars ordered by price_per_day
#[tokio::test]
async fn sorts_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mid = CarFactory::new(db)
        .price_per_day(Decimal::new(200, 0))
        .build()
        .await?;
    let cheap = CarFactory::new(db)
        .price_per_day(Decimal::new(100, 0))
        .build()
        .await?;
    let expensive = CarFactory::new(db)
        .price_per_day(Decimal::new(300, 0))
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let (ascending, total) = repo
        .get_sorted(
            CarSortProperty::PricePerDay,
            SortDirection::Asc,
            PageRequest::default(),
        )
        .await?;
    let (descending, _) = repo
        .get_sorted(
            CarSortProperty::PricePerDay,
            SortDirection::Desc,
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        ascending.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![cheap.id, mid.id, expensive.id]
    );
    assert_eq!(
        descending.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![expensive.id, mid.id, cheap.id]
    );

    Ok(())
}

/// Tests sorting cars by producer name.
///
/// Expected: Ok with cars in alphabetical order
#[tokio::test]
async fn sorts_by_producer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CarFactory::new(db).producer("Volvo").build().await?;
    CarFactory::new(db).producer("Audi").build().await?;
    CarFactory::new(db).producer("Mazda").build().await?;

    let repo = CarRepository::new(db);
    let (cars, _) = repo
        .get_sorted(
            CarSortProperty::Producer,
            SortDirection::Asc,
            PageRequest::default(),
        )
        .await?;

    assert_eq!(
        cars.iter().map(|c| c.producer.as_str()).collect::<Vec<_>>(),
        vec!["Audi", "Mazda", "Volvo"]
    );

    Ok(())
}
