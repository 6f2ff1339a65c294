use crate::model::position::PositionDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub id: i32,
    pub name: String,
}

impl Position {
    pub fn from_entity(entity: entity::position::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> PositionDto {
        PositionDto {
            id: self.id,
            name: self.name,
        }
    }
}
