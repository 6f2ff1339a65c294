use sea_orm::DatabaseConnection;

use crate::server::{data::position::PositionRepository, error::AppError, model::position::Position};

pub struct PositionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PositionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a position, rejecting duplicate names with `Conflict`
    pub async fn create(&self, name: String) -> Result<Position, AppError> {
        let position_repo = PositionRepository::new(self.db);

        let taken = format!("Position {} already exists", name);
        if position_repo.exists_by_name(&name).await? {
            return Err(AppError::Conflict(taken));
        }

        let position = position_repo
            .create(name)
            .await
            .map_err(|e| AppError::from_unique_violation(e, || taken))?;

        Ok(position)
    }

    /// Gets all positions ordered by name
    pub async fn get_all(&self) -> Result<Vec<Position>, AppError> {
        let positions = PositionRepository::new(self.db).get_all().await?;

        Ok(positions)
    }
}
