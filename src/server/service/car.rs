use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, reservation::ReservationRepository},
    error::AppError,
    model::{
        car::{Car, CarSearchParams, CarSortProperty, CreateCarParams, SortDirection, UpdateCarParams},
        pagination::{PageRequest, Paginated},
    },
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new car
    ///
    /// Fails with `Conflict` when the registration number is already taken.
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        let car_repo = CarRepository::new(self.db);

        if car_repo
            .exists_by_registration_number(&params.registration_number, None)
            .await?
        {
            return Err(AppError::Conflict(registration_taken(
                &params.registration_number,
            )));
        }

        let registration_number = params.registration_number.clone();
        let car = car_repo
            .create(params)
            .await
            .map_err(|e| {
                AppError::from_unique_violation(e, || registration_taken(&registration_number))
            })?;
        tracing::info!("Registered car {} ({})", car.id, car.registration_number);

        Ok(car)
    }

    /// Gets a car by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Car>, AppError> {
        let car = CarRepository::new(self.db).get_by_id(id).await?;

        Ok(car)
    }

    /// Gets paginated cars ordered by ID
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Car>, AppError> {
        let (cars, total) = CarRepository::new(self.db).get_paginated(page).await?;

        Ok(Paginated::new(cars, total, page))
    }

    /// Gets paginated cars ordered by a property
    pub async fn get_sorted(
        &self,
        property: CarSortProperty,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<Paginated<Car>, AppError> {
        let (cars, total) = CarRepository::new(self.db)
            .get_sorted(property, direction, page)
            .await?;

        Ok(Paginated::new(cars, total, page))
    }

    /// Searches cars, optionally keeping only those free for a date range
    pub async fn search(
        &self,
        params: CarSearchParams,
        page: PageRequest,
    ) -> Result<Paginated<Car>, AppError> {
        if let (Some(start_date), Some(end_date)) = (params.start_date, params.end_date) {
            if end_date < start_date {
                return Err(AppError::BadRequest(
                    "End date must not be before start date".to_string(),
                ));
            }
        }

        let (cars, total) = CarRepository::new(self.db)
            .search_available(params, page)
            .await?;

        Ok(Paginated::new(cars, total, page))
    }

    /// Updates a car
    ///
    /// Returns `None` if the car doesn't exist.
    pub async fn update(&self, params: UpdateCarParams) -> Result<Option<Car>, AppError> {
        let car_repo = CarRepository::new(self.db);

        if car_repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        if car_repo
            .exists_by_registration_number(&params.registration_number, Some(params.id))
            .await?
        {
            return Err(AppError::Conflict(registration_taken(
                &params.registration_number,
            )));
        }

        let registration_number = params.registration_number.clone();
        let car = car_repo
            .update(params)
            .await
            .map_err(|e| {
                AppError::from_unique_violation(e, || registration_taken(&registration_number))
            })?;

        Ok(Some(car))
    }

    /// Deletes a car
    ///
    /// Returns `false` if the car doesn't exist. Cars referenced by any reservation,
    /// canceled ones included, are kept to preserve reservation history.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let car_repo = CarRepository::new(self.db);

        if car_repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if ReservationRepository::new(self.db)
            .exists_for_car(id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Car with id: {} has reservations and cannot be deleted",
                id
            )));
        }

        let deleted = car_repo.delete(id).await?;

        Ok(deleted)
    }
}

fn registration_taken(registration_number: &str) -> String {
    format!(
        "Car with registration number {} already exists",
        registration_number
    )
}
