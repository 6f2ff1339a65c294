use super::*;

/// Tests creating a position and looking it up by name.
///
/// Expected: Ok with position created and its name reported as taken
#[tokio::test]
async fn creates_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PositionRepository::new(db);
    let position = repo.create("Mechanic".to_string()).await?;

    assert!(position.id > 0);
    assert_eq!(position.name, "Mechanic");
    assert!(repo.exists_by_name("Mechanic").await?);
    assert!(!repo.exists_by_name("Driver").await?);
    assert_eq!(repo.get_by_id(position.id).await?, Some(position));

    Ok(())
}
