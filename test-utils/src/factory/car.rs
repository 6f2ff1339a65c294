//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db)
///     .producer("Toyota")
///     .price_per_day(Decimal::new(15000, 2))
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    producer: String,
    model: String,
    year_of_production: i32,
    registration_number: String,
    price_per_day: Decimal,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - producer: `"Skoda"`
    /// - model: `"Octavia"`
    /// - year_of_production: `2022`
    /// - registration_number: `"TST{id}"` where id is auto-incremented
    /// - price_per_day: `200.00`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            producer: "Skoda".to_string(),
            model: "Octavia".to_string(),
            year_of_production: 2022,
            registration_number: format!("TST{:05}", id),
            price_per_day: Decimal::new(20000, 2),
        }
    }

    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn year_of_production(mut self, year: i32) -> Self {
        self.year_of_production = year;
        self
    }

    pub fn registration_number(mut self, registration_number: impl Into<String>) -> Self {
        self.registration_number = registration_number.into();
        self
    }

    pub fn price_per_day(mut self, price_per_day: Decimal) -> Self {
        self.price_per_day = price_per_day;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            producer: ActiveValue::Set(self.producer),
            model: ActiveValue::Set(self.model),
            year_of_production: ActiveValue::Set(self.year_of_production),
            registration_number: ActiveValue::Set(self.registration_number),
            price_per_day: ActiveValue::Set(self.price_per_day),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
