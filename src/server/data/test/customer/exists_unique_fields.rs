use super::*;

/// Tests uniqueness lookups for email, phone number and driving license.
///
/// The customer's own ID can be excluded so unchanged values pass on update.
///
/// Expected: Ok(true) for taken values, Ok(false) otherwise
#[tokio::test]
async fn detects_taken_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);

    assert!(repo.exists_by_email(&customer.email, None).await?);
    assert!(!repo.exists_by_email("free@example.com", None).await?);
    assert!(
        !repo
            .exists_by_email(&customer.email, Some(customer.id))
            .await?
    );

    assert!(
        repo.exists_by_phone_number(&customer.phone_number, None)
            .await?
    );
    assert!(
        !repo
            .exists_by_phone_number(&customer.phone_number, Some(customer.id))
            .await?
    );

    assert!(
        repo.exists_by_driving_license_number(&customer.driving_license_number, None)
            .await?
    );
    assert!(
        !repo
            .exists_by_driving_license_number("UNUSED", None)
            .await?
    );

    Ok(())
}
