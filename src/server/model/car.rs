//! Domain models for rental cars.

use rust_decimal::Decimal;

use crate::{
    model::car::{CarDto, CreateCarDto, PaginatedCarsDto, UpdateCarDto},
    server::{error::AppError, model::pagination::Paginated},
};

/// A rental car as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub producer: String,
    pub model: String,
    pub year_of_production: i32,
    pub registration_number: String,
    pub price_per_day: Decimal,
}

impl Car {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            producer: entity.producer,
            model: entity.model,
            year_of_production: entity.year_of_production,
            registration_number: entity.registration_number,
            price_per_day: entity.price_per_day,
        }
    }

    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            producer: self.producer,
            model: self.model,
            year_of_production: self.year_of_production,
            registration_number: self.registration_number,
            price_per_day: self.price_per_day,
        }
    }
}

impl Paginated<Car> {
    pub fn into_dto(self) -> PaginatedCarsDto {
        PaginatedCarsDto {
            cars: self.items.into_iter().map(Car::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for registering a new car.
#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub producer: String,
    pub model: String,
    pub year_of_production: i32,
    pub registration_number: String,
    pub price_per_day: Decimal,
}

impl CreateCarParams {
    pub fn from_dto(dto: CreateCarDto) -> Self {
        Self {
            producer: dto.producer.trim().to_string(),
            model: dto.model.trim().to_string(),
            year_of_production: dto.year_of_production,
            registration_number: dto.registration_number.trim().to_string(),
            price_per_day: dto.price_per_day,
        }
    }
}

/// Parameters for replacing the details of an existing car.
#[derive(Debug, Clone)]
pub struct UpdateCarParams {
    pub id: i32,
    pub producer: String,
    pub model: String,
    pub year_of_production: i32,
    pub registration_number: String,
    pub price_per_day: Decimal,
}

impl UpdateCarParams {
    pub fn from_dto(dto: UpdateCarDto) -> Self {
        Self {
            id: dto.id,
            producer: dto.producer.trim().to_string(),
            model: dto.model.trim().to_string(),
            year_of_production: dto.year_of_production,
            registration_number: dto.registration_number.trim().to_string(),
            price_per_day: dto.price_per_day,
        }
    }
}

/// Filters for the car availability search.
///
/// Producer and model match exactly when present. The date range is only applied
/// when both ends are given, in which case cars with a non-canceled reservation
/// overlapping the range are excluded.
#[derive(Debug, Clone, Default)]
pub struct CarSearchParams {
    pub producer: Option<String>,
    pub model: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

/// Column a car listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarSortProperty {
    Id,
    Producer,
    Model,
    YearOfProduction,
    RegistrationNumber,
    PricePerDay,
}

impl CarSortProperty {
    /// Parses a sort property name, rejecting anything outside the allowed set.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "id" => Ok(Self::Id),
            "producer" => Ok(Self::Producer),
            "model" => Ok(Self::Model),
            "year_of_production" => Ok(Self::YearOfProduction),
            "registration_number" => Ok(Self::RegistrationNumber),
            "price_per_day" => Ok(Self::PricePerDay),
            other => Err(AppError::BadRequest(format!(
                "Invalid sort property: {}",
                other
            ))),
        }
    }

    pub fn column(self) -> entity::car::Column {
        use entity::car::Column;

        match self {
            Self::Id => Column::Id,
            Self::Producer => Column::Producer,
            Self::Model => Column::Model,
            Self::YearOfProduction => Column::YearOfProduction,
            Self::RegistrationNumber => Column::RegistrationNumber,
            Self::PricePerDay => Column::PricePerDay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` in any casing selects descending order, anything else ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(direction) if direction.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}
