use super::*;

/// Tests changing the status of a reservation.
///
/// Expected: Ok with reservation in the new status
#[tokio::test]
async fn sets_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_car, _customer, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update_status(reservation.id, ReservationStatus::Canceled)
        .await?;

    assert_eq!(updated.status, ReservationStatus::Canceled);

    let stored = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Canceled);
    assert_eq!(stored.start_date, reservation.start_date);

    Ok(())
}
