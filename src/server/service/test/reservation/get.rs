use super::*;

/// Tests reading reservations by ID and by page.
///
/// Expected: Some for an existing ID, None otherwise, and page totals matching
#[tokio::test]
async fn reads_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CarLockManager::new();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    for month in 1..=3 {
        ReservationFactory::new(db, car.id, customer.id)
            .dates(date(2025, month, 1), date(2025, month, 2))
            .build()
            .await?;
    }

    let service = ReservationService::new(db, &locks);
    let page = service.get_paginated(PageRequest::new(0, 2)).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 2);

    let first = service.get_by_id(page.items[0].id).await?;
    assert_eq!(first.as_ref(), Some(&page.items[0]));
    assert!(service.get_by_id(999_999).await?.is_none());

    Ok(())
}
