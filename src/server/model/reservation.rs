//! Domain models for reservations and their lifecycle rules.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use rust_decimal::Decimal;

use crate::{
    model::reservation::{
        CreateReservationDto, PaginatedReservationsDto, ReservationDto, ReservationStatusDto,
        UpdateReservationDto,
    },
    server::model::{car::Car, customer::Customer, pagination::Paginated},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub car_id: i32,
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            car_id: entity.car_id,
            customer_id: entity.customer_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            total_amount: entity.total_amount,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            car_id: self.car_id,
            customer_id: self.customer_id,
            start_date: self.start_date,
            end_date: self.end_date,
            total_amount: self.total_amount,
            status: status_into_dto(self.status),
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.status == ReservationStatus::Canceled
    }
}

impl Paginated<Reservation> {
    pub fn into_dto(self) -> PaginatedReservationsDto {
        PaginatedReservationsDto {
            reservations: self.items.into_iter().map(Reservation::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// A reservation joined with the car and customer it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub car: Car,
    pub customer: Customer,
}

#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub car_id: i32,
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
}

impl CreateReservationParams {
    pub fn from_dto(dto: CreateReservationDto) -> Self {
        Self {
            car_id: dto.car_id,
            customer_id: dto.customer_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            total_amount: dto.total_amount,
        }
    }
}

/// Parameters for rescheduling a reservation.
///
/// `car_id` and `customer_id` must match the stored reservation; they are carried
/// so the service can reject attempts to move a booking to another car or customer.
#[derive(Debug, Clone)]
pub struct UpdateReservationParams {
    pub id: i32,
    pub car_id: i32,
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
}

impl UpdateReservationParams {
    pub fn from_dto(dto: UpdateReservationDto) -> Self {
        Self {
            id: dto.id,
            car_id: dto.car_id,
            customer_id: dto.customer_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            total_amount: dto.total_amount,
        }
    }
}

pub fn status_into_dto(status: ReservationStatus) -> ReservationStatusDto {
    match status {
        ReservationStatus::Reserved => ReservationStatusDto::Reserved,
        ReservationStatus::Rented => ReservationStatusDto::Rented,
        ReservationStatus::Finished => ReservationStatusDto::Finished,
        ReservationStatus::Canceled => ReservationStatusDto::Canceled,
    }
}

pub fn status_from_dto(status: ReservationStatusDto) -> ReservationStatus {
    match status {
        ReservationStatusDto::Reserved => ReservationStatus::Reserved,
        ReservationStatusDto::Rented => ReservationStatus::Rented,
        ReservationStatusDto::Finished => ReservationStatus::Finished,
        ReservationStatusDto::Canceled => ReservationStatus::Canceled,
    }
}

/// Whether a reservation may move from `from` to `to` through a status change.
///
/// Cancellation has its own operation, so CANCELED can neither be entered nor
/// left here. Status only moves forward: RESERVED, RENTED, FINISHED.
pub fn is_allowed_transition(from: ReservationStatus, to: ReservationStatus) -> bool {
    use ReservationStatus::*;

    matches!(
        (from, to),
        (Reserved, Rented) | (Rented, Finished) | (Reserved, Finished)
    )
}
