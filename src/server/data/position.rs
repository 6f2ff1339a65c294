use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::position::Position;

pub struct PositionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PositionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new position
    pub async fn create(&self, name: String) -> Result<Position, DbErr> {
        let position = entity::position::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Position::from_entity(position))
    }

    /// Gets a position by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Position>, DbErr> {
        let position = entity::prelude::Position::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(position.map(Position::from_entity))
    }

    /// Gets all positions ordered by name
    pub async fn get_all(&self) -> Result<Vec<Position>, DbErr> {
        let positions = entity::prelude::Position::find()
            .order_by_asc(entity::position::Column::Name)
            .all(self.db)
            .await?;

        Ok(positions.into_iter().map(Position::from_entity).collect())
    }

    /// Checks whether a position with the name exists
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Position::find()
            .filter(entity::position::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
