use super::*;

/// Tests listing positions.
///
/// Expected: Ok with positions ordered by name
#[tokio::test]
async fn returns_positions_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::position::create_position_with_name(db, "Manager").await?;
    factory::position::create_position_with_name(db, "Cleaner").await?;
    factory::position::create_position_with_name(db, "Driver").await?;

    let repo = PositionRepository::new(db);
    let positions = repo.get_all().await?;

    assert_eq!(
        positions.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Cleaner", "Driver", "Manager"]
    );

    Ok(())
}
