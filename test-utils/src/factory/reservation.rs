//! Reservation factory for creating test reservation entities.
//!
//! The factory writes rows directly, bypassing the booking rules, which makes it
//! suitable for arranging state (including overlapping or canceled rows) before
//! exercising the service under test.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::date;

/// Factory for creating test reservations with customizable fields.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: i32,
    customer_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_amount: Decimal,
    status: ReservationStatus,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - start_date: `2025-07-01`
    /// - end_date: `2025-07-10`
    /// - total_amount: `2000.00`
    /// - status: `RESERVED`
    pub fn new(db: &'a DatabaseConnection, car_id: i32, customer_id: i32) -> Self {
        Self {
            db,
            car_id,
            customer_id,
            start_date: date(2025, 7, 1),
            end_date: date(2025, 7, 10),
            total_amount: Decimal::new(200000, 2),
            status: ReservationStatus::Reserved,
        }
    }

    /// Sets both ends of the reserved interval.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            car_id: ActiveValue::Set(self.car_id),
            customer_id: ActiveValue::Set(self.customer_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            total_amount: ActiveValue::Set(self.total_amount),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given car and customer.
pub async fn create_reservation(
    db: &DatabaseConnection,
    car_id: i32,
    customer_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, car_id, customer_id)
        .build()
        .await
}
