use super::*;

/// Tests paginating reservations.
///
/// Verifies that pages are ordered by ID and the total counts every row.
///
/// Expected: Ok with two pages worth of reservations
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let mut ids = Vec::new();
    for month in 1..=3 {
        let reservation = ReservationFactory::new(db, car.id, customer.id)
            .dates(date(2025, month, 1), date(2025, month, 5))
            .build()
            .await?;
        ids.push(reservation.id);
    }

    let repo = ReservationRepository::new(db);
    let (first_page, total) = repo.get_paginated(PageRequest::new(0, 2)).await?;
    let (second_page, _) = repo.get_paginated(PageRequest::new(1, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|r| r.id).collect::<Vec<_>>(),
        ids[..2].to_vec()
    );
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, ids[2]);

    Ok(())
}
