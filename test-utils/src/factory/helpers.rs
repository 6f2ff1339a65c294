//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a date from its parts, panicking on an impossible date.
///
/// Only intended for literal dates written in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Creates a car and a customer, the two rows every reservation references.
///
/// # Returns
/// - `Ok((car, customer))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::car::Model, entity::customer::Model), DbErr> {
    let car = crate::factory::car::create_car(db).await?;
    let customer = crate::factory::customer::create_customer(db).await?;

    Ok((car, customer))
}

/// Creates a complete reservation hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Car
/// 2. Customer
/// 3. Reservation in `RESERVED` status using the factory's default dates
///
/// # Returns
/// - `Ok((car, customer, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::car::Model,
        entity::customer::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (car, customer) = create_booking_dependencies(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, car.id, customer.id).await?;

    Ok((car, customer, reservation))
}
