use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        car::{CarDto, CreateCarDto, PaginatedCarsDto, UpdateCarDto},
    },
    server::{
        controller::{require_positive_id, AppJson, PaginationParams},
        error::AppError,
        model::car::{
            CarSearchParams, CarSortProperty, CreateCarParams, SortDirection, UpdateCarParams,
        },
        service::car::CarService,
        state::AppState,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// Filters for `GET /cars/search`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarSearchQuery {
    /// Exact producer name
    pub producer: Option<String>,
    /// Exact model name
    pub model: Option<String>,
    /// First day the car must be free (yyyy-MM-dd)
    pub start_date: Option<NaiveDate>,
    /// Last day the car must be free (yyyy-MM-dd)
    pub end_date: Option<NaiveDate>,
}

impl CarSearchQuery {
    fn into_params(self) -> CarSearchParams {
        CarSearchParams {
            producer: self.producer.filter(|p| !p.trim().is_empty()),
            model: self.model.filter(|m| !m.trim().is_empty()),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Ordering for `GET /cars/sort`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarSortQuery {
    /// One of id, producer, model, year_of_production, registration_number,
    /// price_per_day (default: id)
    pub property: Option<String>,
    /// asc or desc (default: asc)
    pub direction: Option<String>,
}

/// Register a new car.
///
/// # Returns
/// - `201 Created` - The registered car
/// - `400 Bad Request` - Invalid car data
/// - `409 Conflict` - Registration number already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Successfully registered car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 409, description = "Registration number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = CarService::new(&state.db);

    let car = service.create(CreateCarParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Get paginated cars ordered by ID.
#[utoipa::path(
    get,
    path = "/cars",
    tag = CAR_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cars(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let cars = service
        .get_paginated(pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Search cars by producer and model, optionally only those free for a date range.
///
/// The date range is applied only when both `start_date` and `end_date` are given.
/// A car is excluded when any of its non-canceled reservations shares at least one
/// day with the range.
///
/// # Returns
/// - `200 OK` - Matching cars
/// - `400 Bad Request` - End date before start date, or invalid pagination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/search",
    tag = CAR_TAG,
    params(CarSearchQuery, PaginationParams),
    responses(
        (status = 200, description = "Successfully searched cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid search parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_cars(
    State(state): State<AppState>,
    Query(query): Query<CarSearchQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let cars = service
        .search(query.into_params(), pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Get paginated cars ordered by a property.
///
/// # Returns
/// - `200 OK` - Sorted cars
/// - `400 Bad Request` - Unknown sort property, or invalid pagination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/sort",
    tag = CAR_TAG,
    params(CarSortQuery, PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved sorted cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid sort property", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sort_cars(
    State(state): State<AppState>,
    Query(query): Query<CarSortQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let property = match query.property.as_deref() {
        Some(property) => CarSortProperty::parse(property)?,
        None => CarSortProperty::Id,
    };
    let direction = SortDirection::parse(query.direction.as_deref());

    let service = CarService::new(&state.db);

    let cars = service
        .get_sorted(property, direction, pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Get a car by ID.
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved car", body = CarDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = CarService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(car) => Ok((StatusCode::OK, Json(car.into_dto()))),
        None => Err(car_not_found(id)),
    }
}

/// Update a car.
///
/// # Returns
/// - `200 OK` - The updated car
/// - `400 Bad Request` - Invalid car data
/// - `404 Not Found` - Car not found
/// - `409 Conflict` - Registration number already in use by another car
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/cars",
    tag = CAR_TAG,
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Successfully updated car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Registration number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = payload.id;
    let service = CarService::new(&state.db);

    match service.update(UpdateCarParams::from_dto(payload)).await? {
        Some(car) => Ok((StatusCode::OK, Json(car.into_dto()))),
        None => Err(car_not_found(id)),
    }
}

/// Delete a car.
///
/// Cars with reservations, canceled ones included, cannot be deleted.
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted car"),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Car has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = CarService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(car_not_found(id))
    }
}

fn car_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Car not found with id: {}", id))
}
