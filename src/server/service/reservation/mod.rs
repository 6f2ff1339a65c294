//! Reservation booking engine.
//!
//! `ReservationService` drives the reservation lifecycle. Every operation that writes
//! a reservation follows the same sequence:
//!
//! 1. take the per-car lock from [`lock::CarLockManager`]
//! 2. open a database transaction and lock the car row
//! 3. re-read the reservation and check for overlapping non-canceled reservations
//! 4. write and commit, or return an error and let the transaction roll back
//!
//! Returning early drops the `DatabaseTransaction`, which rolls it back. The car
//! lock guard is declared before the transaction so it is released last.

pub mod lock;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{customer::CustomerRepository, reservation::ReservationRepository},
    error::AppError,
    model::{
        pagination::{PageRequest, Paginated},
        reservation::{
            is_allowed_transition, CreateReservationParams, Reservation, UpdateReservationParams,
        },
    },
};

use self::lock::{lock_car_for_update, CarLockManager};

pub const CAR_ALREADY_BOOKED: &str = "Car already booked for this date";
pub const CANNOT_UPDATE_CANCELED: &str = "Cannot update canceled reservation";
pub const CANNOT_CHANGE_CAR_OR_CUSTOMER: &str =
    "Cannot change car or customer of a reservation, cancel it and create a new one";

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a CarLockManager,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a CarLockManager) -> Self {
        Self { db, locks }
    }

    /// Books a car for a customer.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - New reservation in RESERVED status
    /// - `Err(AppError::NotFound)` - Car or customer does not exist
    /// - `Err(AppError::Conflict)` - Car already has an overlapping reservation
    /// - `Err(AppError::BadRequest)` - End date before start date
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        ensure_date_order(params.start_date, params.end_date)?;

        let _car_lock = self.locks.acquire(params.car_id).await;
        let txn = self.db.begin().await?;

        let car = lock_car_for_update(&txn, params.car_id).await?;

        CustomerRepository::new(&txn)
            .get_by_id(params.customer_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Customer not found with id: {}", params.customer_id))
            })?;

        let reservation_repo = ReservationRepository::new(&txn);
        if reservation_repo
            .exists_overlap(car.id, params.start_date, params.end_date)
            .await?
        {
            tracing::debug!(
                "Rejected booking of car {} for {}..{}: overlapping reservation",
                car.id,
                params.start_date,
                params.end_date
            );
            return Err(AppError::Conflict(CAR_ALREADY_BOOKED.to_string()));
        }

        let reservation = reservation_repo.create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created reservation {} for car {} ({}..{})",
            reservation.id,
            reservation.car_id,
            reservation.start_date,
            reservation.end_date
        );

        Ok(reservation)
    }

    /// Moves a reservation to new dates and amount.
    ///
    /// The car and customer of a reservation are fixed; changing either requires
    /// canceling and booking again.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Rescheduled reservation
    /// - `Err(AppError::NotFound)` - Reservation or its car does not exist
    /// - `Err(AppError::Conflict)` - Reservation is canceled, car or customer
    ///   differs, or the new dates overlap another reservation of the car
    /// - `Err(AppError::BadRequest)` - End date before start date
    pub async fn update(&self, params: UpdateReservationParams) -> Result<Reservation, AppError> {
        ensure_date_order(params.start_date, params.end_date)?;

        let car_id = self.car_of(params.id).await?;

        let _car_lock = self.locks.acquire(car_id).await;
        let txn = self.db.begin().await?;
        lock_car_for_update(&txn, car_id).await?;
        let reservation_repo = ReservationRepository::new(&txn);

        // Re-read under the lock; the reservation may have changed while waiting.
        let existing = reservation_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| reservation_not_found(params.id))?;

        if existing.is_canceled() {
            return Err(AppError::Conflict(CANNOT_UPDATE_CANCELED.to_string()));
        }
        if existing.car_id != params.car_id || existing.customer_id != params.customer_id {
            return Err(AppError::Conflict(CANNOT_CHANGE_CAR_OR_CUSTOMER.to_string()));
        }

        if reservation_repo
            .exists_overlap_excluding(
                existing.car_id,
                params.start_date,
                params.end_date,
                existing.id,
            )
            .await?
        {
            tracing::debug!(
                "Rejected rescheduling of reservation {} to {}..{}: overlapping reservation",
                existing.id,
                params.start_date,
                params.end_date
            );
            return Err(AppError::Conflict(CAR_ALREADY_BOOKED.to_string()));
        }

        let reservation = reservation_repo
            .reschedule(
                existing.id,
                params.start_date,
                params.end_date,
                params.total_amount,
            )
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Rescheduled reservation {} to {}..{}",
            reservation.id,
            reservation.start_date,
            reservation.end_date
        );

        Ok(reservation)
    }

    /// Cancels a reservation, freeing its dates for other bookings.
    ///
    /// Canceling an already canceled reservation succeeds without writing. Waits for
    /// the car lock, so it never interleaves with a reschedule or status change.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation in CANCELED status
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    pub async fn cancel(&self, id: i32) -> Result<Reservation, AppError> {
        let car_id = self.car_of(id).await?;

        let _car_lock = self.locks.acquire(car_id).await;
        let txn = self.db.begin().await?;
        lock_car_for_update(&txn, car_id).await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let existing = reservation_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))?;

        if existing.is_canceled() {
            return Ok(existing);
        }

        let reservation = reservation_repo
            .update_status(id, ReservationStatus::Canceled)
            .await?;
        txn.commit().await?;

        tracing::info!("Canceled reservation {}", reservation.id);

        Ok(reservation)
    }

    /// Advances a reservation through RESERVED, RENTED and FINISHED.
    ///
    /// Setting the current status again is a no-op.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation in the requested status
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::Conflict)` - Transition not allowed
    pub async fn change_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Reservation, AppError> {
        let car_id = self.car_of(id).await?;

        let _car_lock = self.locks.acquire(car_id).await;
        let txn = self.db.begin().await?;
        lock_car_for_update(&txn, car_id).await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let existing = reservation_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))?;

        if existing.status == status {
            return Ok(existing);
        }
        if !is_allowed_transition(existing.status, status) {
            return Err(AppError::Conflict(format!(
                "Cannot change reservation status from {} to {}",
                status_name(existing.status),
                status_name(status)
            )));
        }

        let reservation = reservation_repo.update_status(id, status).await?;
        txn.commit().await?;

        tracing::info!(
            "Reservation {} moved to {}",
            reservation.id,
            status_name(reservation.status)
        );

        Ok(reservation)
    }

    /// Car of a reservation, read without locking.
    ///
    /// A reservation never changes car, so the result stays valid for picking the
    /// lock. Everything else must be re-read once the lock is held.
    async fn car_of(&self, id: i32) -> Result<i32, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))?;

        Ok(reservation.car_id)
    }

    /// Gets a reservation by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        let reservation = ReservationRepository::new(self.db).get_by_id(id).await?;

        Ok(reservation)
    }

    /// Gets paginated reservations ordered by ID
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Reservation>, AppError> {
        let (reservations, total) = ReservationRepository::new(self.db)
            .get_paginated(page)
            .await?;

        Ok(Paginated::new(reservations, total, page))
    }
}

fn ensure_date_order(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if end_date < start_date {
        return Err(AppError::BadRequest(
            "End date must not be before start date".to_string(),
        ));
    }
    Ok(())
}

fn reservation_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reservation not found with id: {}", id))
}

fn status_name(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Reserved => "RESERVED",
        ReservationStatus::Rented => "RENTED",
        ReservationStatus::Finished => "FINISHED",
        ReservationStatus::Canceled => "CANCELED",
    }
}
