use crate::server::{
    error::AppError,
    model::{
        pagination::PageRequest,
        reservation::{CreateReservationParams, UpdateReservationParams},
    },
    service::reservation::{
        lock::CarLockManager, ReservationService, CANNOT_CHANGE_CAR_OR_CUSTOMER,
        CANNOT_UPDATE_CANCELED, CAR_ALREADY_BOOKED,
    },
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use rust_decimal::Decimal;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date, reservation::ReservationFactory},
};

mod cancel;
mod change_status;
mod get;
mod update;

fn booking(
    car_id: i32,
    customer_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> CreateReservationParams {
    CreateReservationParams {
        car_id,
        customer_id,
        start_date,
        end_date,
        total_amount: Decimal::new(100000, 2),
    }
}

fn assert_conflict(result: Result<impl std::fmt::Debug, AppError>, expected: &str) {
    match result {
        Err(AppError::Conflict(message)) => assert_eq!(message, expected),
        other => panic!("expected Conflict({:?}), got {:?}", expected, other),
    }
}
