use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            ChangeReservationStatusDto, CreateReservationDto, PaginatedReservationsDto,
            ReservationDto, UpdateReservationDto,
        },
    },
    server::{
        controller::{require_positive_id, AppJson, PaginationParams},
        error::AppError,
        model::reservation::{
            status_from_dto, CreateReservationParams, UpdateReservationParams,
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book a car for a customer.
///
/// The car is locked for the duration of the booking so that concurrent requests
/// for the same car are checked one after another. Dates use the `dd-MM-yyyy`
/// format and both ends are inclusive.
///
/// # Returns
/// - `201 Created` - The new reservation in RESERVED status
/// - `400 Bad Request` - Invalid reservation data
/// - `404 Not Found` - Car or customer not found
/// - `409 Conflict` - Car already booked for an overlapping date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 404, description = "Car or customer not found", body = ErrorDto),
        (status = 409, description = "Car already booked for this date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ReservationService::new(&state.db, &state.car_locks);

    let reservation = service
        .create(CreateReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Reschedule a reservation.
///
/// Only dates and total amount may change. Canceled reservations cannot be
/// updated, and changing car or customer requires a new reservation.
///
/// # Returns
/// - `200 OK` - The updated reservation
/// - `400 Bad Request` - Invalid reservation data
/// - `404 Not Found` - Reservation not found
/// - `409 Conflict` - Reservation canceled, car or customer changed, or dates taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Successfully updated reservation", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Update not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ReservationService::new(&state.db, &state.car_locks);

    let reservation = service
        .update(UpdateReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Cancel a reservation.
///
/// Canceling an already canceled reservation returns it unchanged.
#[utoipa::path(
    put,
    path = "/reservations/{id}/cancel",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully canceled reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = ReservationService::new(&state.db, &state.car_locks);

    let reservation = service.cancel(id).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Move a reservation to RENTED or FINISHED.
#[utoipa::path(
    put,
    path = "/reservations/{id}/status",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ChangeReservationStatusDto,
    responses(
        (status = 200, description = "Successfully changed reservation status", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Status transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_reservation_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ChangeReservationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = ReservationService::new(&state.db, &state.car_locks);

    let reservation = service
        .change_status(id, status_from_dto(payload.status))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = ReservationService::new(&state.db, &state.car_locks);

    match service.get_by_id(id).await? {
        Some(reservation) => Ok((StatusCode::OK, Json(reservation.into_dto()))),
        None => Err(AppError::NotFound(format!(
            "Reservation not found with id: {}",
            id
        ))),
    }
}

#[utoipa::path(
    get,
    path = "/reservations",
    tag = RESERVATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved reservations", body = PaginatedReservationsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db, &state.car_locks);

    let reservations = service
        .get_paginated(pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(reservations.into_dto())))
}
