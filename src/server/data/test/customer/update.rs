use super::*;

/// Tests updating a customer and deleting them afterwards.
///
/// Expected: Ok with updated fields, then Ok(true) on delete
#[tokio::test]
async fn updates_and_deletes_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    let updated = repo.update(customer.id, details("update")).await?;

    assert_eq!(updated.id, customer.id);
    assert_eq!(updated.last_name, "Nowak");
    assert_eq!(updated.driving_license_number, "LIC-update");

    assert!(repo.delete(customer.id).await?);
    assert!(repo.get_by_id(customer.id).await?.is_none());

    Ok(())
}

/// Tests updating a customer that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let result = repo.update(999_999, details("missing")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
