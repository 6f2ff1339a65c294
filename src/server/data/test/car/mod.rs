use crate::server::{
    data::car::CarRepository,
    model::{
        car::{CarSearchParams, CarSortProperty, CreateCarParams, SortDirection, UpdateCarParams},
        pagination::PageRequest,
    },
};
use entity::sea_orm_active_enums::ReservationStatus;
use rust_decimal::Decimal;
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, car::CarFactory, helpers::date, reservation::ReservationFactory},
};

mod create;
mod delete;
mod exists_by_registration_number;
mod find_for_update;
mod get_sorted;
mod search_available;
