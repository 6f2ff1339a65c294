//! Position factory for creating test position entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a position with a unique default name (`"Position {id}"`).
pub async fn create_position(db: &DatabaseConnection) -> Result<entity::position::Model, DbErr> {
    create_position_with_name(db, format!("Position {}", next_id())).await
}

/// Creates a position with the provided name.
pub async fn create_position_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::position::Model, DbErr> {
    entity::position::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
