use super::*;

/// Tests detecting a registration number already in use.
///
/// Expected: Ok(true) for the used number, Ok(false) for a free one
#[tokio::test]
async fn detects_used_registration_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = CarFactory::new(db)
        .registration_number("PO55555")
        .build()
        .await?;

    let repo = CarRepository::new(db);

    assert!(repo.exists_by_registration_number("PO55555", None).await?);
    assert!(!repo.exists_by_registration_number("PO00000", None).await?);
    assert!(
        !repo
            .exists_by_registration_number(&car.registration_number, Some(car.id))
            .await?
    );

    Ok(())
}
