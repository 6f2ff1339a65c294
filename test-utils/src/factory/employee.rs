//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    position_id: i32,
    first_name: String,
    last_name: String,
    phone_number: String,
    email: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Anna"`
    /// - last_name: `"Nowak {id}"`
    /// - phone_number: `{id}` offset and zero-padded to nine digits
    /// - email: `"employee{id}@example.com"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `position_id` - Position the employee holds
    pub fn new(db: &'a DatabaseConnection, position_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            position_id,
            first_name: "Anna".to_string(),
            last_name: format!("Nowak {}", id),
            phone_number: format!("{:09}", 500_000_000 + id),
            email: format!("employee{}@example.com", id),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            position_id: ActiveValue::Set(self.position_id),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values holding the given position.
pub async fn create_employee(
    db: &DatabaseConnection,
    position_id: i32,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, position_id).build().await
}
